use crate::error::ConditionError;
use once_cell::sync::Lazy;
use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

/// Comparison operator a field condition is rendered with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operator {
    Eq,
    NotEq,
    Gt,
    Lt,
    Gte,
    Lte,
    Like,
    In,
    NotIn,
    Between,
    NotBetween,
    IsNull,
    NotNull,
}

// Lookup by label and by name, normalised through `normalize_key`
static BY_KEY: Lazy<HashMap<String, Operator>> = Lazy::new(|| {
    let mut map = HashMap::new();
    for op in Operator::ALL {
        map.insert(normalize_key(op.label()), op);
        map.insert(normalize_key(op.name()), op);
    }
    map
});

fn normalize_key(key: &str) -> String {
    key.trim()
        .split(|c: char| c == '_' || c == '-' || c.is_whitespace())
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
        .to_ascii_uppercase()
}

impl Operator {
    pub const ALL: [Operator; 13] = [
        Operator::Eq,
        Operator::NotEq,
        Operator::Gt,
        Operator::Lt,
        Operator::Gte,
        Operator::Lte,
        Operator::Like,
        Operator::In,
        Operator::NotIn,
        Operator::Between,
        Operator::NotBetween,
        Operator::IsNull,
        Operator::NotNull,
    ];

    /// Label shown to the user when picking an operator.
    pub fn label(self) -> &'static str {
        match self {
            Operator::Eq => "=",
            Operator::NotEq => "!=",
            Operator::Gt => ">",
            Operator::Lt => "<",
            Operator::Gte => ">=",
            Operator::Lte => "<=",
            Operator::Like => "LIKE",
            Operator::In => "IN",
            Operator::NotIn => "NOT IN",
            Operator::Between => "BETWEEN",
            Operator::NotBetween => "NOT BETWEEN",
            Operator::IsNull => "IS NULL",
            Operator::NotNull => "NOT NULL",
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Operator::Eq => "EQ",
            Operator::NotEq => "NOT_EQ",
            Operator::Gt => "GT",
            Operator::Lt => "LT",
            Operator::Gte => "GTE",
            Operator::Lte => "LTE",
            Operator::Like => "LIKE",
            Operator::In => "IN",
            Operator::NotIn => "NOT_IN",
            Operator::Between => "BETWEEN",
            Operator::NotBetween => "NOT_BETWEEN",
            Operator::IsNull => "IS_NULL",
            Operator::NotNull => "NOT_NULL",
        }
    }

    /// SQL token as it appears inside mapper XML, with angle brackets escaped.
    pub fn sql_token(self) -> &'static str {
        match self {
            Operator::Gt => "&gt;",
            Operator::Lt => "&lt;",
            Operator::Gte => "&gt;=",
            Operator::Lte => "&lt;=",
            other => other.label(),
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Operator {
    type Err = ConditionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        BY_KEY
            .get(&normalize_key(s))
            .copied()
            .ok_or_else(|| ConditionError::UnknownOperator {
                value: s.to_string(),
            })
    }
}
