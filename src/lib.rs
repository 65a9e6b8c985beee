pub mod application;
pub mod cli;
pub mod domain;
pub mod infrastructure;

use crate::application::derive_insight::DeriveInsightUseCase;
use crate::application::evaluate_strategy::{
    DecisionReport, EvaluateStrategyUseCase, ValidationReport,
};
use crate::application::scan_insights::{InsightScan, NewsItem, ScanInsightsUseCase};
use crate::domain::entities::derived_insight::DerivedInsight;
use crate::domain::entities::score_context::ScoreContext;
use crate::domain::entities::sentiment_reading::SentimentReading;
use crate::domain::entities::strategy::StrategyDefinition;
use crate::domain::ports::noise_source::NoiseSource;
use crate::domain::values::engine_weights::{EngineWeights, WeightCheck};
use crate::infrastructure::noise::uniform::UniformNoise;
use std::sync::Arc;

/// Facade over the scoring core: strategy rule evaluation on one side,
/// news insight derivation on the other. Every operation is a pure,
/// synchronous computation; the only injectable piece is the noise
/// source feeding sparkline generation.
pub struct SignalDesk {
    evaluate_uc: EvaluateStrategyUseCase,
    insight_uc: DeriveInsightUseCase,
    scan_uc: ScanInsightsUseCase,
}

impl SignalDesk {
    pub fn new() -> Self {
        Self::with_noise(Arc::new(UniformNoise))
    }

    pub fn with_noise(noise: Arc<dyn NoiseSource>) -> Self {
        Self {
            evaluate_uc: EvaluateStrategyUseCase::new(),
            insight_uc: DeriveInsightUseCase::new(noise.clone()),
            scan_uc: ScanInsightsUseCase::new(DeriveInsightUseCase::new(noise)),
        }
    }

    // Delegating methods

    /// Advisory check that the five engine weights total 1.0.
    pub fn validate_weights(&self, weights: &EngineWeights) -> WeightCheck {
        weights.validate()
    }

    /// Submission gate for a full strategy definition.
    pub fn validate_strategy(&self, definition: &StrategyDefinition) -> ValidationReport {
        self.evaluate_uc.validate(definition)
    }

    /// Evaluate a strategy against an asset's score context.
    pub fn decide(
        &self,
        definition: &StrategyDefinition,
        context: &ScoreContext,
    ) -> DecisionReport {
        self.evaluate_uc.execute(definition, context)
    }

    /// Derive the insight bundle for one news item.
    pub fn derive_insight(
        &self,
        symbol: &str,
        headline: Option<String>,
        reading: &SentimentReading,
    ) -> DerivedInsight {
        self.insight_uc.execute(symbol, headline, reading)
    }

    /// Score a batch of news items and return them ranked by impact.
    pub fn scan(
        &self,
        items: &[NewsItem],
        min_impact: Option<i64>,
        limit: Option<usize>,
    ) -> InsightScan {
        self.scan_uc.execute(items, min_impact, limit)
    }
}

impl Default for SignalDesk {
    fn default() -> Self {
        Self::new()
    }
}
