//! Insight derivation use case — turns one sentiment reading into the
//! bundle of indicators the dashboard renders on a news card.

use std::sync::Arc;

use chrono::Utc;

use crate::domain::entities::derived_insight::DerivedInsight;
use crate::domain::entities::sentiment_reading::SentimentReading;
use crate::domain::ports::noise_source::NoiseSource;
use crate::domain::values::impact::Impact;
use crate::domain::values::market_mood::MarketMood;
use crate::domain::values::risk_rating::RiskRating;
use crate::domain::values::trend_direction::TrendDirection;

/// Number of points in a generated sparkline.
pub const SPARKLINE_LEN: usize = 20;

/// Per-point noise amplitude for the sparkline.
const SPARKLINE_NOISE: f64 = 5.0;

pub struct DeriveInsightUseCase {
    noise: Arc<dyn NoiseSource>,
}

impl DeriveInsightUseCase {
    pub fn new(noise: Arc<dyn NoiseSource>) -> Self {
        Self { noise }
    }

    /// Derive the full insight for one news item.
    pub fn execute(
        &self,
        symbol: &str,
        headline: Option<String>,
        reading: &SentimentReading,
    ) -> DerivedInsight {
        let impact = Impact::from_reading(reading);
        let mood = MarketMood::from_label(reading.label);

        DerivedInsight {
            symbol: symbol.to_string(),
            headline,
            market_mood: mood,
            impact_score: impact.score,
            impact_level: impact.level,
            risk_rating: RiskRating::from_confidence(reading.confidence),
            trend_direction: TrendDirection::from_score(reading.score),
            narrative: self.build_narrative(reading, symbol),
            sparkline: self.build_sparkline(reading, SPARKLINE_LEN),
            derived_at: Utc::now(),
        }
    }

    /// Templated card text: label clause, mood clause, then a magnitude
    /// range of `|score|·10` to `|score|·10 + 5` percent.
    pub fn build_narrative(&self, reading: &SentimentReading, symbol: &str) -> String {
        let mood = MarketMood::from_label(reading.label);
        let low = reading.score.abs() * 10.0;
        let high = low + 5.0;
        format!(
            "Coverage of {} reads {}; the market mood is {}, suggesting a move in the {:.1}%-{:.1}% range",
            symbol, reading.label, mood, low, high
        )
    }

    /// Synthetic series for the card's mini chart: a linear ramp from a
    /// base of 50 toward `50 + score·20`, with per-point uniform noise,
    /// every value clamped to `[0, 100]`. Decorative only; callers must
    /// not treat it as price history.
    pub fn build_sparkline(&self, reading: &SentimentReading, length: usize) -> Vec<f64> {
        let base = 50.0;
        let trend = reading.score * 20.0;
        let steps = length.saturating_sub(1).max(1) as f64;

        (0..length)
            .map(|i| {
                let drift = trend * i as f64 / steps;
                (base + drift + self.noise.sample(SPARKLINE_NOISE)).clamp(0.0, 100.0)
            })
            .collect()
    }
}
