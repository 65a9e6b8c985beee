use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "signaldesk", about = "Strategy rule evaluation and news insight scoring")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Check that engine weights total 1.0
    Weights {
        /// JSON with sentiment, trend, fundamental, event_risk, liquidity
        json: String,
    },
    /// Validate a full strategy definition before submission
    Validate {
        /// JSON with engine_weights, entry_rules, exit_rules
        json: String,
    },
    /// Evaluate a strategy against an asset's score context
    Decide {
        /// Strategy JSON (engine_weights, entry_rules, exit_rules)
        strategy: String,
        /// Score context JSON (e.g. {"final_score":0.62,"metadata":{...}})
        context: String,
    },
    /// Derive the insight bundle for one news item
    Insight {
        /// Asset symbol (used in the narrative)
        symbol: String,
        /// JSON with score, confidence, label
        reading: String,
        /// Original headline to carry into the card
        #[arg(long)]
        headline: Option<String>,
    },
    /// Score a batch of news items and rank them by impact
    Scan {
        /// JSON array of items with symbol, score, confidence, label, headline
        items: String,
        /// Drop insights scoring below this impact
        #[arg(long)]
        min_impact: Option<i64>,
        /// Keep at most this many insights
        #[arg(long)]
        limit: Option<usize>,
    },
}
