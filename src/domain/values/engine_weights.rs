//! Engine weight allocation across the five scoring factors.
//!
//! A strategy distributes 100% of its conviction across five named
//! engines: `sentiment`, `trend`, `fundamental`, `event_risk`, and
//! `liquidity`. The weighted combination of their outputs yields the
//! `final_score` a strategy's rules compare against.
//!
//! Validation here is advisory: the check reports whether the weights
//! sum to 1.0 within tolerance, but nothing downstream refuses to
//! evaluate a strategy whose weights are off. Blocking submission on an
//! invalid total is the caller's responsibility.

use serde::{Deserialize, Serialize};

/// Absolute tolerance on the weight sum. Totals within this distance of
/// 1.0 are considered valid.
pub const WEIGHT_SUM_TOLERANCE: f64 = 0.01;

/// Per-engine weight allocation, each nominally in `[0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EngineWeights {
    pub sentiment: f64,
    pub trend: f64,
    pub fundamental: f64,
    pub event_risk: f64,
    pub liquidity: f64,
}

/// Result of a weight-sum check.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct WeightCheck {
    /// Whether the total falls within tolerance of 1.0.
    pub valid: bool,
    /// The actual sum of the five weights.
    pub total: f64,
}

impl EngineWeights {
    /// Sum of all five engine weights.
    pub fn total(&self) -> f64 {
        self.sentiment + self.trend + self.fundamental + self.event_risk + self.liquidity
    }

    /// Check that the weights sum to 1.0 within [`WEIGHT_SUM_TOLERANCE`].
    ///
    /// Never corrects the values; only reports.
    pub fn validate(&self) -> WeightCheck {
        let total = self.total();
        WeightCheck {
            valid: (total - 1.0).abs() < WEIGHT_SUM_TOLERANCE,
            total,
        }
    }
}

impl Default for EngineWeights {
    /// Balanced preset used to seed the strategy form.
    fn default() -> Self {
        EngineWeights {
            sentiment: 0.35,
            trend: 0.25,
            fundamental: 0.15,
            event_risk: 0.15,
            liquidity: 0.10,
        }
    }
}
