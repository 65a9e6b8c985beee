use clap::Parser;
use serde::de::DeserializeOwned;
use signaldesk::application::scan_insights::NewsItem;
use signaldesk::cli::commands::{Cli, Commands};
use signaldesk::domain::entities::score_context::ScoreContext;
use signaldesk::domain::entities::sentiment_reading::SentimentReading;
use signaldesk::domain::entities::strategy::StrategyDefinition;
use signaldesk::domain::error::DomainError;
use signaldesk::domain::values::engine_weights::EngineWeights;
use signaldesk::SignalDesk;

fn main() {
    let cli = Cli::parse();
    let desk = SignalDesk::new();

    if let Err(e) = run_command(desk, cli.command) {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

fn run_command(desk: SignalDesk, cmd: Commands) -> Result<(), Box<dyn std::error::Error>> {
    match cmd {
        Commands::Weights { json } => {
            let weights: EngineWeights = parse_json("weights", &json)?;
            let check = desk.validate_weights(&weights);
            println!("{}", serde_json::to_string_pretty(&check)?);
        }
        Commands::Validate { json } => {
            let definition: StrategyDefinition = parse_json("strategy", &json)?;
            let report = desk.validate_strategy(&definition);
            println!("{}", serde_json::to_string_pretty(&report)?);
        }
        Commands::Decide { strategy, context } => {
            let definition: StrategyDefinition = parse_json("strategy", &strategy)?;
            let context: ScoreContext = parse_json("context", &context)?;

            let gate = desk.validate_strategy(&definition);
            if !gate.valid {
                for issue in &gate.issues {
                    eprintln!("WARNING: {issue}");
                }
            }

            let report = desk.decide(&definition, &context);
            println!("{}", serde_json::to_string_pretty(&report)?);
        }
        Commands::Insight {
            symbol,
            reading,
            headline,
        } => {
            let reading: SentimentReading = parse_json("reading", &reading)?;
            let insight = desk.derive_insight(&symbol, headline, &reading);
            println!("{}", serde_json::to_string_pretty(&insight)?);
        }
        Commands::Scan {
            items,
            min_impact,
            limit,
        } => {
            let items: Vec<NewsItem> = parse_json("items", &items)?;
            let scan = desk.scan(&items, min_impact, limit);
            println!("{}", serde_json::to_string_pretty(&scan)?);
        }
    }
    Ok(())
}

fn parse_json<T: DeserializeOwned>(label: &str, raw: &str) -> Result<T, DomainError> {
    serde_json::from_str(raw).map_err(|e| DomainError::Parse(format!("{label}: {e}")))
}
