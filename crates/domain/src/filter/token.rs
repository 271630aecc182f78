use super::expr::Predicate;
use crate::cache_record::RecordType;
use crate::DomainError;
use fancy_regex::Regex;

/// RPN operators.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operator {
    And,
    Or,
    Not,
}

impl Operator {
    pub fn as_str(&self) -> &'static str {
        match self {
            Operator::And => "and",
            Operator::Or => "or",
            Operator::Not => "not",
        }
    }

    pub fn arity(&self) -> usize {
        match self {
            Operator::Not => 1,
            Operator::And | Operator::Or => 2,
        }
    }
}

/// One `-f` token.
#[derive(Debug, Clone)]
pub enum FilterToken {
    Leaf(Predicate),
    Operator(Operator),
}

/// Names accepted before the `:` of a filter token.
pub const FILTER_NAMES: &[&str] = &["name", "type", "ip", "and", "or", "not"];

/// Parse `<filtername>` or `<filtername>:<arg>`.
///
/// The token is split at the first `:` only, so an `ip` regex for IPv6
/// addresses keeps its colons.
pub fn parse_filter_token(spec: &str) -> Result<FilterToken, DomainError> {
    let (filter_name, arg) = match spec.split_once(':') {
        Some((filter_name, arg)) => (filter_name, Some(arg)),
        None => (spec, None),
    };

    match filter_name {
        "name" => compile(spec, arg).map(|regex| FilterToken::Leaf(Predicate::Name(regex))),
        "ip" => compile(spec, arg).map(|regex| FilterToken::Leaf(Predicate::Ip(regex))),
        "type" => {
            let arg = require_arg(spec, arg)?;
            arg.parse::<RecordType>()
                .map(|record_type| FilterToken::Leaf(Predicate::Type(record_type)))
                .map_err(|e| DomainError::malformed_filter(spec, e))
        }
        "and" => operator(spec, arg, Operator::And),
        "or" => operator(spec, arg, Operator::Or),
        "not" => operator(spec, arg, Operator::Not),
        other => Err(DomainError::malformed_filter(
            spec,
            format!(
                "unknown filter '{}', expected one of: {}",
                other,
                FILTER_NAMES.join(", ")
            ),
        )),
    }
}

fn require_arg<'a>(spec: &str, arg: Option<&'a str>) -> Result<&'a str, DomainError> {
    arg.ok_or_else(|| DomainError::malformed_filter(spec, "missing ':<argument>'"))
}

fn compile(spec: &str, arg: Option<&str>) -> Result<Regex, DomainError> {
    let pattern = require_arg(spec, arg)?;
    Regex::new(pattern)
        .map_err(|e| DomainError::malformed_filter(spec, format!("invalid regex: {}", e)))
}

fn operator(spec: &str, arg: Option<&str>, op: Operator) -> Result<FilterToken, DomainError> {
    match arg {
        None => Ok(FilterToken::Operator(op)),
        Some(_) => Err(DomainError::malformed_filter(
            spec,
            format!("operator '{}' takes no argument", op.as_str()),
        )),
    }
}
