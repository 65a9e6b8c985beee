//! Impact scoring for news sentiment.
//!
//! A reading's impact blends magnitude and conviction equally:
//! `score = round(|sentiment| * 50 + confidence * 50)`, which lands in
//! `[0, 100]` for in-domain inputs. The formula is applied as written;
//! out-of-domain inputs (e.g. a confidence above 1.0) produce out-of-band
//! scores rather than an error, and the level banding still applies.

use crate::domain::entities::sentiment_reading::SentimentReading;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Qualitative impact band.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ImpactLevel {
    Low,
    Medium,
    High,
}

impl ImpactLevel {
    /// Band an impact score: High at 75+, Medium at 50+, Low below.
    pub fn for_score(score: i64) -> Self {
        if score >= 75 {
            ImpactLevel::High
        } else if score >= 50 {
            ImpactLevel::Medium
        } else {
            ImpactLevel::Low
        }
    }
}

impl fmt::Display for ImpactLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ImpactLevel::Low => write!(f, "Low"),
            ImpactLevel::Medium => write!(f, "Medium"),
            ImpactLevel::High => write!(f, "High"),
        }
    }
}

/// Numeric impact score with its qualitative band.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct Impact {
    pub score: i64,
    pub level: ImpactLevel,
}

impl Impact {
    pub fn from_reading(reading: &SentimentReading) -> Self {
        let score = (reading.score.abs() * 50.0 + reading.confidence * 50.0).round() as i64;
        Impact {
            score,
            level: ImpactLevel::for_score(score),
        }
    }
}
