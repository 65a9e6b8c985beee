use crate::domain::values::sentiment_label::SentimentLabel;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Overall market mood derived from a sentiment reading.
///
/// Driven solely by the categorical label, never by the numeric score:
/// a weakly positive article still reads as bullish coverage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MarketMood {
    Bullish,
    Bearish,
    Neutral,
}

impl MarketMood {
    pub fn from_label(label: SentimentLabel) -> Self {
        match label {
            SentimentLabel::Positive => MarketMood::Bullish,
            SentimentLabel::Negative => MarketMood::Bearish,
            SentimentLabel::Neutral => MarketMood::Neutral,
        }
    }
}

impl fmt::Display for MarketMood {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MarketMood::Bullish => write!(f, "Bullish"),
            MarketMood::Bearish => write!(f, "Bearish"),
            MarketMood::Neutral => write!(f, "Neutral"),
        }
    }
}
