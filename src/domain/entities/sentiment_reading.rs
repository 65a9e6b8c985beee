use crate::domain::values::sentiment_label::SentimentLabel;
use serde::{Deserialize, Serialize};

/// Raw output of the external sentiment model for one news item.
///
/// `score` is nominally in `[-1, 1]` and `confidence` in `[0, 1]`, but
/// neither is validated here; the derivation formulas are applied as
/// written to whatever the model produced.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct SentimentReading {
    pub score: f64,
    pub confidence: f64,
    pub label: SentimentLabel,
}

impl SentimentReading {
    pub fn new(score: f64, confidence: f64, label: SentimentLabel) -> Self {
        SentimentReading {
            score,
            confidence,
            label,
        }
    }
}
