//! Strategy evaluation use case — validation gate plus rule-by-rule
//! decision reports.

use chrono::Utc;
use serde::Serialize;

use crate::domain::entities::score_context::ScoreContext;
use crate::domain::entities::strategy::{Rule, StrategyDefinition};
use crate::domain::values::decision::Decision;
use crate::domain::values::field_path::FieldPath;
use crate::domain::values::operator::Operator;

/// Outcome of the submission gate for a strategy definition.
///
/// Reports, never throws: the caller decides whether to block
/// submission on `valid = false`.
#[derive(Debug, Serialize)]
pub struct ValidationReport {
    pub valid: bool,
    pub weights_valid: bool,
    pub weight_total: f64,
    pub issues: Vec<String>,
}

/// How a single rule fared against the context.
#[derive(Debug, Serialize)]
pub struct RuleEvaluation {
    pub field: FieldPath,
    pub operator: Operator,
    pub threshold: f64,
    /// Resolved value, absent when the field did not resolve to a number.
    pub observed: Option<f64>,
    pub satisfied: bool,
}

/// Full evaluation result: the decision plus the per-rule trace the
/// dashboard renders next to it.
#[derive(Debug, Serialize)]
pub struct DecisionReport {
    pub decided_at: chrono::DateTime<Utc>,
    pub decision: Decision,
    pub entry_satisfied: bool,
    pub exit_satisfied: bool,
    pub entry_rules: Vec<RuleEvaluation>,
    pub exit_rules: Vec<RuleEvaluation>,
}

pub struct EvaluateStrategyUseCase;

impl EvaluateStrategyUseCase {
    pub fn new() -> Self {
        EvaluateStrategyUseCase
    }

    /// Check a definition before it is handed to the signal-generation
    /// API: engine weights must total 1.0 within tolerance and at least
    /// one entry rule must be present.
    pub fn validate(&self, definition: &StrategyDefinition) -> ValidationReport {
        let check = definition.engine_weights.validate();
        let mut issues = Vec::new();

        if !check.valid {
            issues.push(format!(
                "engine weights must total 1.0, got {:.3}",
                check.total
            ));
        }
        if definition.entry_rules.is_empty() {
            issues.push("at least one entry rule is required".to_string());
        }

        ValidationReport {
            valid: issues.is_empty(),
            weights_valid: check.valid,
            weight_total: check.total,
            issues,
        }
    }

    /// Evaluate a definition against a context, tracing every rule.
    ///
    /// The trace re-resolves each field the same way [`Rule::evaluate`]
    /// does, so the reported decision always matches what the rules
    /// actually saw.
    pub fn execute(
        &self,
        definition: &StrategyDefinition,
        context: &ScoreContext,
    ) -> DecisionReport {
        let entry_rules = trace_rules(&definition.entry_rules, context);
        let exit_rules = trace_rules(&definition.exit_rules, context);

        let entry_satisfied = entry_rules.iter().all(|r| r.satisfied);
        let exit_satisfied = exit_rules.iter().any(|r| r.satisfied);

        DecisionReport {
            decided_at: Utc::now(),
            decision: definition.decide(context),
            entry_satisfied,
            exit_satisfied,
            entry_rules,
            exit_rules,
        }
    }
}

impl Default for EvaluateStrategyUseCase {
    fn default() -> Self {
        Self::new()
    }
}

fn trace_rules(rules: &[Rule], context: &ScoreContext) -> Vec<RuleEvaluation> {
    rules
        .iter()
        .map(|rule| {
            let observed = context.resolve(&rule.field);
            RuleEvaluation {
                field: rule.field.clone(),
                operator: rule.operator,
                threshold: rule.value,
                observed,
                satisfied: rule.evaluate(context),
            }
        })
        .collect()
}
