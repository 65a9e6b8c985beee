use serde::{Deserialize, Serialize};
use std::fmt;

/// Assessed risk of acting on a reading.
///
/// Inverted relative to impact: the more confident the model, the less
/// risky the reading is to act on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RiskRating {
    Low,
    Medium,
    High,
}

impl RiskRating {
    pub fn from_confidence(confidence: f64) -> Self {
        if confidence > 0.7 {
            RiskRating::Low
        } else if confidence > 0.4 {
            RiskRating::Medium
        } else {
            RiskRating::High
        }
    }
}

impl fmt::Display for RiskRating {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RiskRating::Low => write!(f, "Low"),
            RiskRating::Medium => write!(f, "Medium"),
            RiskRating::High => write!(f, "High"),
        }
    }
}
