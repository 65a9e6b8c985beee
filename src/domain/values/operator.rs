use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Threshold comparison operator used by strategy rules.
///
/// Comparisons use exact IEEE-754 semantics; there is no epsilon.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Operator {
    #[serde(rename = ">")]
    GreaterThan,
    #[serde(rename = "<")]
    LessThan,
    #[serde(rename = ">=")]
    GreaterOrEqual,
    #[serde(rename = "<=")]
    LessOrEqual,
}

impl Operator {
    /// Apply the operator with `lhs` as the observed value and `rhs` as
    /// the rule threshold.
    pub fn compare(&self, lhs: f64, rhs: f64) -> bool {
        match self {
            Operator::GreaterThan => lhs > rhs,
            Operator::LessThan => lhs < rhs,
            Operator::GreaterOrEqual => lhs >= rhs,
            Operator::LessOrEqual => lhs <= rhs,
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Operator::GreaterThan => write!(f, ">"),
            Operator::LessThan => write!(f, "<"),
            Operator::GreaterOrEqual => write!(f, ">="),
            Operator::LessOrEqual => write!(f, "<="),
        }
    }
}

impl FromStr for Operator {
    type Err = String;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            ">" => Ok(Operator::GreaterThan),
            "<" => Ok(Operator::LessThan),
            ">=" => Ok(Operator::GreaterOrEqual),
            "<=" => Ok(Operator::LessOrEqual),
            _ => Err(format!("Unknown operator: {s}")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strict_vs_inclusive_at_threshold() {
        assert!(!Operator::GreaterThan.compare(0.5, 0.5));
        assert!(Operator::GreaterOrEqual.compare(0.5, 0.5));
        assert!(!Operator::LessThan.compare(0.5, 0.5));
        assert!(Operator::LessOrEqual.compare(0.5, 0.5));
    }

    #[test]
    fn test_symbol_round_trip() {
        for sym in [">", "<", ">=", "<="] {
            let op: Operator = sym.parse().unwrap();
            assert_eq!(op.to_string(), sym);
        }
        assert!("==".parse::<Operator>().is_err());
    }
}
