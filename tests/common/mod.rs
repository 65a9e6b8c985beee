//! Shared test helpers.

use signaldesk::domain::entities::sentiment_reading::SentimentReading;
use signaldesk::domain::entities::strategy::{Rule, StrategyDefinition};
use signaldesk::domain::values::engine_weights::EngineWeights;
use signaldesk::domain::values::operator::Operator;
use signaldesk::domain::values::sentiment_label::SentimentLabel;
use signaldesk::infrastructure::noise::flat::FlatNoise;
use signaldesk::SignalDesk;
use std::sync::Arc;

/// Facade with zero-noise sparklines, so every derivation is fully
/// deterministic.
pub fn setup() -> SignalDesk {
    SignalDesk::with_noise(Arc::new(FlatNoise))
}

pub fn make_reading(score: f64, confidence: f64, label: SentimentLabel) -> SentimentReading {
    SentimentReading::new(score, confidence, label)
}

pub fn make_rule(field: &str, operator: &str, value: f64) -> Rule {
    Rule::new(field, operator.parse::<Operator>().unwrap(), value)
}

pub fn make_strategy(entry_rules: Vec<Rule>, exit_rules: Vec<Rule>) -> StrategyDefinition {
    StrategyDefinition {
        engine_weights: EngineWeights::default(),
        entry_rules,
        exit_rules,
    }
}
