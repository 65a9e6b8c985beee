pub mod derived_insight;
pub mod score_context;
pub mod sentiment_reading;
pub mod strategy;
