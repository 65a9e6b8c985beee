use serde::{Deserialize, Serialize};
use std::fmt;

/// Direction the sentiment suggests the asset is trending.
///
/// A ±0.1 dead-band around zero keeps near-neutral readings from
/// flip-flopping between up and down.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TrendDirection {
    Up,
    Down,
    Neutral,
}

impl TrendDirection {
    pub fn from_score(score: f64) -> Self {
        if score > 0.1 {
            TrendDirection::Up
        } else if score < -0.1 {
            TrendDirection::Down
        } else {
            TrendDirection::Neutral
        }
    }
}

impl fmt::Display for TrendDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TrendDirection::Up => write!(f, "up"),
            TrendDirection::Down => write!(f, "down"),
            TrendDirection::Neutral => write!(f, "neutral"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dead_band() {
        assert_eq!(TrendDirection::from_score(0.05), TrendDirection::Neutral);
        assert_eq!(TrendDirection::from_score(-0.1), TrendDirection::Neutral);
        assert_eq!(TrendDirection::from_score(0.1), TrendDirection::Neutral);
        assert_eq!(TrendDirection::from_score(0.11), TrendDirection::Up);
        assert_eq!(TrendDirection::from_score(-0.11), TrendDirection::Down);
    }
}
