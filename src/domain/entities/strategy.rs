//! User-authored trading strategies: weighted engines plus entry/exit
//! threshold rules, evaluated against a score context.

use crate::domain::entities::score_context::ScoreContext;
use crate::domain::values::decision::Decision;
use crate::domain::values::engine_weights::EngineWeights;
use crate::domain::values::field_path::FieldPath;
use crate::domain::values::operator::Operator;
use serde::{Deserialize, Serialize};

/// A single threshold comparison over one field of a score context.
///
/// The field path is opaque: no check is made that it names a known
/// factor, and the threshold is not range-checked.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Rule {
    pub field: FieldPath,
    pub operator: Operator,
    pub value: f64,
}

impl Rule {
    pub fn new(field: impl Into<FieldPath>, operator: Operator, value: f64) -> Self {
        Rule {
            field: field.into(),
            operator,
            value,
        }
    }

    /// Evaluate this rule against a context.
    ///
    /// A field that fails to resolve evaluates `false`: a missing factor
    /// never triggers a trade.
    pub fn evaluate(&self, context: &ScoreContext) -> bool {
        match context.resolve(&self.field) {
            Some(observed) => self.operator.compare(observed, self.value),
            None => false,
        }
    }
}

/// A complete strategy definition as submitted from the strategy form.
///
/// Immutable once handed over for evaluation. `entry_rules` is expected
/// to be non-empty; the validation gate reports a violation but
/// evaluation stays total either way.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StrategyDefinition {
    pub engine_weights: EngineWeights,
    pub entry_rules: Vec<Rule>,
    pub exit_rules: Vec<Rule>,
}

impl StrategyDefinition {
    /// All entry rules hold (logical AND).
    pub fn entry_satisfied(&self, context: &ScoreContext) -> bool {
        self.entry_rules.iter().all(|rule| rule.evaluate(context))
    }

    /// At least one exit rule holds (logical OR); an empty exit set
    /// never fires.
    pub fn exit_satisfied(&self, context: &ScoreContext) -> bool {
        self.exit_rules.iter().any(|rule| rule.evaluate(context))
    }

    /// Evaluate the strategy to a ternary decision.
    ///
    /// When the entry and exit conditions hold simultaneously, the
    /// decision is EXIT: closing an existing position outranks opening a
    /// new one. Deterministic for a fixed definition and context.
    pub fn decide(&self, context: &ScoreContext) -> Decision {
        if self.exit_satisfied(context) {
            Decision::Exit
        } else if self.entry_satisfied(context) {
            Decision::Enter
        } else {
            Decision::Hold
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_rule_round_trips_through_json() {
        let raw = r#"{ "field": "final_score", "operator": ">=", "value": 0.5 }"#;
        let rule: Rule = serde_json::from_str(raw).unwrap();
        assert_eq!(rule.field.as_str(), "final_score");
        assert_eq!(rule.operator, Operator::GreaterOrEqual);
        let back = serde_json::to_value(&rule).unwrap();
        assert_eq!(back["operator"], ">=");
    }

    #[test]
    fn test_missing_field_fails_closed() {
        let rule = Rule::new("momentum.score", Operator::GreaterThan, 0.0);
        let ctx = ScoreContext::new(json!({ "final_score": 0.9 }));
        assert!(!rule.evaluate(&ctx));
    }
}
