use crate::cache_record::{CacheRecord, RecordType};
use fancy_regex::Regex;
use std::fmt;

/// Leaf predicate over a single record.
#[derive(Debug, Clone)]
pub enum Predicate {
    /// Unanchored regex search over the owner name
    Name(Regex),
    /// Exact record type
    Type(RecordType),
    /// Unanchored regex search over the address of A/AAAA records
    Ip(Regex),
}

impl Predicate {
    pub fn matches(&self, record: &CacheRecord) -> bool {
        match self {
            Predicate::Name(regex) => search(regex, record.name()),
            Predicate::Type(record_type) => record.record_type() == *record_type,
            Predicate::Ip(regex) => record.ip().is_some_and(|ip| search(regex, ip)),
        }
    }
}

// A backtracking-limit error from the regex engine counts as no match.
fn search(regex: &Regex, haystack: &str) -> bool {
    regex.is_match(haystack).unwrap_or(false)
}

impl fmt::Display for Predicate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Predicate::Name(regex) => write!(f, "name~/{}/", regex.as_str()),
            Predicate::Type(record_type) => write!(f, "type={}", record_type),
            Predicate::Ip(regex) => write!(f, "ip~/{}/", regex.as_str()),
        }
    }
}

/// Boolean expression tree built from RPN filter tokens.
#[derive(Debug, Clone)]
pub enum FilterExpr {
    Leaf(Predicate),
    Not(Box<FilterExpr>),
    And(Box<FilterExpr>, Box<FilterExpr>),
    Or(Box<FilterExpr>, Box<FilterExpr>),
}

impl FilterExpr {
    pub fn leaf(predicate: Predicate) -> Self {
        FilterExpr::Leaf(predicate)
    }

    pub fn negate(inner: FilterExpr) -> Self {
        FilterExpr::Not(Box::new(inner))
    }

    pub fn and(left: FilterExpr, right: FilterExpr) -> Self {
        FilterExpr::And(Box::new(left), Box::new(right))
    }

    pub fn or(left: FilterExpr, right: FilterExpr) -> Self {
        FilterExpr::Or(Box::new(left), Box::new(right))
    }

    pub fn evaluate(&self, record: &CacheRecord) -> bool {
        match self {
            FilterExpr::Leaf(predicate) => predicate.matches(record),
            FilterExpr::Not(inner) => !inner.evaluate(record),
            FilterExpr::And(left, right) => left.evaluate(record) && right.evaluate(record),
            FilterExpr::Or(left, right) => left.evaluate(record) || right.evaluate(record),
        }
    }
}

/// Infix rendering, used in log output.
impl fmt::Display for FilterExpr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FilterExpr::Leaf(predicate) => write!(f, "{}", predicate),
            FilterExpr::Not(inner) => write!(f, "not {}", inner),
            FilterExpr::And(left, right) => write!(f, "({} and {})", left, right),
            FilterExpr::Or(left, right) => write!(f, "({} or {})", left, right),
        }
    }
}
