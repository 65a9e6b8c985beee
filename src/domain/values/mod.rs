pub mod decision;
pub mod engine_weights;
pub mod field_path;
pub mod impact;
pub mod market_mood;
pub mod operator;
pub mod risk_rating;
pub mod sentiment_label;
pub mod trend_direction;
