//! Batch insight scan — derives an insight per news item and returns
//! them ranked for the dashboard feed.

use chrono::Utc;
use serde::{Deserialize, Serialize};

use crate::application::derive_insight::DeriveInsightUseCase;
use crate::domain::entities::derived_insight::DerivedInsight;
use crate::domain::entities::sentiment_reading::SentimentReading;

/// One news item handed in for scoring.
#[derive(Debug, Clone, Deserialize)]
pub struct NewsItem {
    pub symbol: String,
    pub headline: Option<String>,
    #[serde(flatten)]
    pub reading: SentimentReading,
}

/// Result of scoring a batch of news items.
#[derive(Debug, Serialize)]
pub struct InsightScan {
    pub scanned_at: chrono::DateTime<Utc>,
    pub items_scanned: usize,
    pub total_insights: usize,
    pub insights: Vec<DerivedInsight>,
}

pub struct ScanInsightsUseCase {
    derive_uc: DeriveInsightUseCase,
}

impl ScanInsightsUseCase {
    pub fn new(derive_uc: DeriveInsightUseCase) -> Self {
        Self { derive_uc }
    }

    /// Score every item, keep those at or above `min_impact`, and return
    /// them ranked by impact score descending (symbol ascending on ties,
    /// for deterministic ordering), truncated to `limit`.
    pub fn execute(
        &self,
        items: &[NewsItem],
        min_impact: Option<i64>,
        limit: Option<usize>,
    ) -> InsightScan {
        let items_scanned = items.len();

        let mut insights: Vec<DerivedInsight> = items
            .iter()
            .map(|item| {
                self.derive_uc
                    .execute(&item.symbol, item.headline.clone(), &item.reading)
            })
            .collect();

        if let Some(min) = min_impact {
            insights.retain(|i| i.impact_score >= min);
        }

        insights.sort_by(|a, b| {
            b.impact_score
                .cmp(&a.impact_score)
                .then_with(|| a.symbol.cmp(&b.symbol))
        });

        if let Some(max) = limit {
            insights.truncate(max);
        }

        InsightScan {
            scanned_at: Utc::now(),
            items_scanned,
            total_insights: insights.len(),
            insights,
        }
    }
}
