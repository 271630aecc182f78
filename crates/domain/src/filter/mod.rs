//! Record filters built from RPN token lists.
//!
//! Each `-f` option is one token. Leaf filters (`name:<re>`, `type:<T>`,
//! `ip:<re>`) push a predicate; `not` replaces the top of the stack with its
//! negation; `and`/`or` combine the two topmost entries. Exactly one
//! expression must remain once all tokens are consumed.

pub mod expr;
pub mod token;

pub use expr::{FilterExpr, Predicate};
pub use token::{parse_filter_token, FilterToken, Operator, FILTER_NAMES};

use crate::cache_record::CacheRecord;
use crate::DomainError;

/// A compiled filter. With no expression every record passes.
#[derive(Debug, Clone, Default)]
pub struct CacheFilter {
    expr: Option<FilterExpr>,
}

impl CacheFilter {
    pub fn identity() -> Self {
        Self::default()
    }

    pub fn from_expr(expr: FilterExpr) -> Self {
        Self { expr: Some(expr) }
    }

    /// Build a filter from RPN tokens, in the order they were given.
    pub fn from_specs<I, S>(specs: I) -> Result<Self, DomainError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let specs: Vec<String> = specs
            .into_iter()
            .map(|spec| spec.as_ref().to_string())
            .collect();
        let mut stack: Vec<FilterExpr> = Vec::with_capacity(specs.len());

        for spec in &specs {
            match parse_filter_token(spec)? {
                FilterToken::Leaf(predicate) => stack.push(FilterExpr::leaf(predicate)),
                FilterToken::Operator(Operator::Not) => {
                    let inner = pop_operand(&mut stack, spec, Operator::Not)?;
                    stack.push(FilterExpr::negate(inner));
                }
                FilterToken::Operator(op) => {
                    let right = pop_operand(&mut stack, spec, op)?;
                    let left = pop_operand(&mut stack, spec, op)?;
                    stack.push(match op {
                        Operator::Or => FilterExpr::or(left, right),
                        _ => FilterExpr::and(left, right),
                    });
                }
            }
        }

        match stack.len() {
            0 => Ok(Self::identity()),
            1 => Ok(Self { expr: stack.pop() }),
            remaining => Err(DomainError::malformed_filter(
                specs.join(" "),
                format!(
                    "incomplete expression, {} operands left without an operator",
                    remaining
                ),
            )),
        }
    }

    pub fn expr(&self) -> Option<&FilterExpr> {
        self.expr.as_ref()
    }

    pub fn is_identity(&self) -> bool {
        self.expr.is_none()
    }

    pub fn matches(&self, record: &CacheRecord) -> bool {
        self.expr
            .as_ref()
            .map_or(true, |expr| expr.evaluate(record))
    }

    /// Records accepted by the filter, in their original order.
    pub fn apply(&self, records: &[CacheRecord]) -> Vec<CacheRecord> {
        records
            .iter()
            .filter(|record| self.matches(record))
            .cloned()
            .collect()
    }
}

fn pop_operand(
    stack: &mut Vec<FilterExpr>,
    spec: &str,
    op: Operator,
) -> Result<FilterExpr, DomainError> {
    stack.pop().ok_or_else(|| {
        DomainError::malformed_filter(
            spec,
            format!(
                "operator '{}' needs {} operand(s) on the stack",
                op.as_str(),
                op.arity()
            ),
        )
    })
}
