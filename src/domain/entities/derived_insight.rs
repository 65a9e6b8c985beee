use crate::domain::values::impact::ImpactLevel;
use crate::domain::values::market_mood::MarketMood;
use crate::domain::values::risk_rating::RiskRating;
use crate::domain::values::trend_direction::TrendDirection;
use chrono::{DateTime, Utc};
use serde::Serialize;

/// The full set of indicators derived from one sentiment reading.
///
/// Purely derived and recomputed on every call; it carries no persisted
/// identity. The sparkline is illustrative chart dressing, not a real
/// price history.
#[derive(Debug, Clone, Serialize)]
pub struct DerivedInsight {
    /// Asset the news item is about.
    pub symbol: String,
    /// Original headline, when the caller supplied one.
    pub headline: Option<String>,
    pub market_mood: MarketMood,
    pub impact_score: i64,
    pub impact_level: ImpactLevel,
    pub risk_rating: RiskRating,
    pub trend_direction: TrendDirection,
    /// Templated summary text for the insight card.
    pub narrative: String,
    /// Synthetic series in `[0, 100]` drifting with the sentiment sign.
    pub sparkline: Vec<f64>,
    pub derived_at: DateTime<Utc>,
}
