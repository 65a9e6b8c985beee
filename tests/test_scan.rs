//! Tests for the batch insight scan: ranking, filtering, limits.

mod common;

use common::setup;
use signaldesk::application::scan_insights::NewsItem;

fn items() -> Vec<NewsItem> {
    serde_json::from_str(
        r#"[
            { "symbol": "BTC",  "score": 0.8,  "confidence": 0.9, "label": "positive",
              "headline": "ETF inflows accelerate" },
            { "symbol": "ETH",  "score": -0.6, "confidence": 0.5, "label": "negative" },
            { "symbol": "AAPL", "score": 0.1,  "confidence": 0.3, "label": "neutral" },
            { "symbol": "SOL",  "score": 0.8,  "confidence": 0.9, "label": "positive" }
        ]"#,
    )
    .unwrap()
}

#[test]
fn test_scan_ranks_by_impact_descending() {
    let desk = setup();
    let scan = desk.scan(&items(), None, None);

    assert_eq!(scan.items_scanned, 4);
    assert_eq!(scan.total_insights, 4);

    let scores: Vec<i64> = scan.insights.iter().map(|i| i.impact_score).collect();
    let mut sorted = scores.clone();
    sorted.sort_by(|a, b| b.cmp(a));
    assert_eq!(scores, sorted);
}

#[test]
fn test_scan_ties_break_on_symbol() {
    let desk = setup();
    let scan = desk.scan(&items(), None, None);

    // BTC and SOL share an impact of 85; BTC sorts first.
    assert_eq!(scan.insights[0].symbol, "BTC");
    assert_eq!(scan.insights[1].symbol, "SOL");
    assert_eq!(scan.insights[0].impact_score, scan.insights[1].impact_score);
}

#[test]
fn test_scan_min_impact_filter() {
    let desk = setup();
    let scan = desk.scan(&items(), Some(50), None);

    // AAPL (|0.1|*50 + 0.3*50 = 20) drops out; ETH stays at
    // |-0.6|*50 + 0.5*50 = 55.
    assert_eq!(scan.items_scanned, 4);
    assert_eq!(scan.total_insights, 3);
    assert!(scan.insights.iter().all(|i| i.impact_score >= 50));
}

#[test]
fn test_scan_limit_truncates_after_ranking() {
    let desk = setup();
    let scan = desk.scan(&items(), None, Some(2));

    assert_eq!(scan.total_insights, 2);
    assert_eq!(scan.insights[0].symbol, "BTC");
    assert_eq!(scan.insights[1].symbol, "SOL");
}

#[test]
fn test_scan_carries_headlines() {
    let desk = setup();
    let scan = desk.scan(&items(), None, None);

    assert_eq!(
        scan.insights[0].headline.as_deref(),
        Some("ETF inflows accelerate")
    );
    assert_eq!(scan.insights[1].headline, None);
}

#[test]
fn test_empty_scan() {
    let desk = setup();
    let scan = desk.scan(&[], Some(50), Some(10));

    assert_eq!(scan.items_scanned, 0);
    assert_eq!(scan.total_insights, 0);
    assert!(scan.insights.is_empty());
}
