//! Integration tests for headline display.
//!
//! Feeds serialized tick reports through the ticker the way a renderer
//! would, checking that headlines outlive the ticks that produced them.

use std::time::Duration;

use broadcast::{BroadcastConfig, HeadlineTicker};
use society_events::{TickReport, MEDIA_HEADLINES};

fn reports() -> Vec<TickReport> {
    let jsonl = r#"{"generation":1,"media_boosted":0,"converted_to_critical":3,"converted_to_non_critical":1,"life_crises":0,"information_overloads":0}
{"generation":2,"media_event":{"headline_index":2},"media_boosted":41,"converted_to_critical":0,"converted_to_non_critical":5,"life_crises":1,"information_overloads":0}
{"generation":3}
{"generation":4}"#;

    jsonl
        .lines()
        .map(|line| serde_json::from_str(line).expect("Failed to parse report"))
        .collect()
}

/// Headline stays up across fast ticks and hides after its duration.
#[test]
fn test_headline_outlives_fast_ticks() {
    let mut ticker = HeadlineTicker::new(BroadcastConfig::default());
    let period = Duration::from_millis(50);

    let mut visible_at = Vec::new();
    for (i, report) in reports().iter().enumerate() {
        let now = period * i as u32;
        ticker.observe(report, now);
        visible_at.push(ticker.caption(now));
    }

    assert_eq!(visible_at[0], None);
    assert_eq!(
        visible_at[1].as_deref(),
        Some(format!("Media: {}", MEDIA_HEADLINES[2]).as_str())
    );
    assert!(visible_at[2].is_some());
    assert!(visible_at[3].is_some());

    // announced at 50ms, hidden from 3050ms
    assert!(ticker.is_visible(Duration::from_millis(3049)));
    assert!(!ticker.is_visible(Duration::from_millis(3050)));
    assert_eq!(ticker.announced(), 1);
}

/// Reports without media events never show anything.
#[test]
fn test_quiet_reports_show_nothing() {
    let mut ticker = HeadlineTicker::default();
    for generation in 1..=100 {
        let report = TickReport::new(generation);
        assert!(ticker
            .observe(&report, Duration::from_millis(generation * 10))
            .is_none());
    }
    assert_eq!(ticker.announced(), 0);
}
