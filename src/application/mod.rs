pub mod derive_insight;
pub mod evaluate_strategy;
pub mod scan_insights;
