//! End-to-end flows over the facade: author a strategy, gate it,
//! evaluate it across assets, and score the day's news.

mod common;

use common::{make_reading, make_rule, make_strategy, setup};
use serde_json::json;
use signaldesk::domain::entities::score_context::ScoreContext;
use signaldesk::domain::entities::strategy::StrategyDefinition;
use signaldesk::domain::values::decision::Decision;
use signaldesk::domain::values::sentiment_label::SentimentLabel;

#[test]
fn test_author_validate_evaluate_flow() {
    let desk = setup();

    // A definition as the strategy form would submit it.
    let raw = json!({
        "engine_weights": {
            "sentiment": 0.35,
            "trend": 0.25,
            "fundamental": 0.15,
            "event_risk": 0.15,
            "liquidity": 0.10
        },
        "entry_rules": [
            { "field": "final_score", "operator": ">", "value": 0.5 },
            { "field": "metadata.engine_details.trend.score", "operator": ">", "value": 0.0 }
        ],
        "exit_rules": [
            { "field": "final_score", "operator": "<", "value": -0.3 }
        ]
    });
    let strategy: StrategyDefinition = serde_json::from_value(raw).unwrap();

    let gate = desk.validate_strategy(&strategy);
    assert!(gate.valid, "form gate should pass: {:?}", gate.issues);

    // The scoring service's payload carries fields we never look at.
    let ctx = ScoreContext::from(json!({
        "final_score": 0.62,
        "computed_at": "2026-08-07T09:30:00Z",
        "metadata": {
            "engine_details": {
                "sentiment": { "score": 0.4, "confidence": 0.8 },
                "trend": { "score": 0.2 }
            }
        }
    }));

    let report = desk.decide(&strategy, &ctx);
    assert_eq!(report.decision, Decision::Enter);
    assert!(report.entry_satisfied);
    assert!(!report.exit_satisfied);
}

#[test]
fn test_portfolio_sweep_is_independent_per_asset() {
    let desk = setup();
    let strategy = make_strategy(
        vec![make_rule("final_score", ">", 0.5)],
        vec![make_rule("final_score", "<", -0.3)],
    );

    let contexts = [
        ("BTC", json!({ "final_score": 0.7 }), Decision::Enter),
        ("ETH", json!({ "final_score": -0.5 }), Decision::Exit),
        ("AAPL", json!({ "final_score": 0.1 }), Decision::Hold),
        ("SOL", json!({}), Decision::Hold),
    ];

    for (symbol, ctx, expected) in contexts {
        let report = desk.decide(&strategy, &ScoreContext::from(ctx));
        assert_eq!(report.decision, expected, "unexpected decision for {symbol}");
    }
}

#[test]
fn test_news_to_insight_flow() {
    let desk = setup();
    let reading = make_reading(-0.45, 0.8, SentimentLabel::Negative);

    let insight = desk.derive_insight("ETH", Some("Exchange outage rattles traders".into()), &reading);

    // Bearish mood, down trend, mid-band impact (22.5 + 40 → 63), low
    // risk from the confident model.
    assert_eq!(insight.impact_score, 63);
    assert!(insight.narrative.contains("ETH"));
    assert!(insight.narrative.contains("negative"));

    let serialized = serde_json::to_value(&insight).unwrap();
    assert_eq!(serialized["market_mood"], "Bearish");
    assert_eq!(serialized["trend_direction"], "down");
    assert_eq!(serialized["impact_level"], "Medium");
    assert_eq!(serialized["risk_rating"], "Low");
}
