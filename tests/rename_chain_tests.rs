// Rename chain construction tests
// Interval matching, chain termination and the claimed-once rule

mod common;

use repolog::ingest::{IngestSession, build_chains, derive_intervals};
use repolog::model::{RenameEvent, RenameInterval};

fn interval(from: Option<&str>, to: Option<&str>, ts: i64, ts_end: i64) -> RenameInterval {
    RenameInterval {
        from_name: from.map(str::to_string),
        to_name: to.map(str::to_string),
        timestamp: ts,
        timestamp_end: ts_end,
    }
}

fn files(names: &[&str]) -> Vec<String> {
    names.iter().map(|n| n.to_string()).collect()
}

#[test]
fn test_simple_rename_chain() {
    let intervals = vec![interval(Some("A.ts"), Some("B.ts"), 1000, 2000)];

    let chains = build_chains(&intervals, &files(&["B.ts"]));

    assert_eq!(chains.len(), 1);
    let chain = &chains[0];
    assert_eq!(chain.len(), 2);
    assert_eq!(chain[0].to_name.as_deref(), Some("B.ts"));
    assert_eq!(chain[0].from_name.as_deref(), Some("B.ts"));
    assert_eq!(chain[1].from_name.as_deref(), Some("A.ts"));
}

#[test]
fn test_three_hop_chain_ordered_newest_to_oldest() {
    let intervals = vec![
        interval(Some("B.ts"), Some("C.ts"), 2000, 3000),
        interval(Some("A.ts"), Some("B.ts"), 1000, 2000),
    ];

    let chains = build_chains(&intervals, &files(&["C.ts"]));

    assert_eq!(chains.len(), 1);
    let chain = &chains[0];
    assert_eq!(chain.len(), 3);
    assert_eq!(chain[0].to_name.as_deref(), Some("C.ts"));
    assert_eq!(chain[1].from_name.as_deref(), Some("B.ts"));
    assert_eq!(chain[2].from_name.as_deref(), Some("A.ts"));
}

#[test]
fn test_creation_event_completes_chain() {
    let intervals = vec![interval(None, Some("A.ts"), 1000, 2000)];

    let chains = build_chains(&intervals, &files(&["A.ts"]));

    assert_eq!(chains.len(), 1);
    let chain = &chains[0];
    assert_eq!(chain[0].from_name.as_deref(), Some("A.ts"));
    assert_eq!(chain[0].to_name.as_deref(), Some("A.ts"));
    // The head's timestamp picks up the end of the matched interval
    assert_eq!(chain[0].timestamp, 2000);
    assert_eq!(chain.len(), 2);
    assert!(chain[1].from_name.is_none());
}

#[test]
fn test_deletion_interval_produces_no_chain() {
    let intervals = vec![interval(Some("A.ts"), None, 1000, 2000)];

    let chains = build_chains(&intervals, &[]);

    assert!(chains.is_empty());
}

#[test]
fn test_renamed_away_path_produces_no_chain() {
    // B.ts appears as a target but no longer exists
    let intervals = vec![interval(Some("A.ts"), Some("B.ts"), 1000, 2000)];

    let chains = build_chains(&intervals, &files(&["other.ts"]));

    assert_eq!(chains.len(), 1);
    assert_eq!(chains[0].len(), 1);
    assert_eq!(chains[0][0].to_name.as_deref(), Some("other.ts"));
}

#[test]
fn test_independent_chains() {
    let intervals = vec![
        interval(Some("X.ts"), Some("Y.ts"), 1500, 2500),
        interval(Some("A.ts"), Some("B.ts"), 1000, 2000),
    ];

    let chains = build_chains(&intervals, &files(&["B.ts", "Y.ts"]));

    assert_eq!(chains.len(), 2);
    assert!(chains.iter().all(|c| c.len() == 2));
}

#[test]
fn test_empty_inputs() {
    let chains = build_chains(&[], &files(&["file.ts"]));
    assert_eq!(chains.len(), 1);
    assert_eq!(chains[0][0].from_name.as_deref(), Some("file.ts"));

    let chains = build_chains(&[], &[]);
    assert!(chains.is_empty());
}

#[test]
fn test_end_to_end_from_event_log() {
    // Two batches renaming the same file twice, then chains over the log
    let batch1 = common::log_text(&[
        common::header("Alice", 1000, 990, "c1"),
        common::numstat("1", "0", "{A.ts => B.ts}"),
    ]);
    let batch2 = common::log_text(&[
        common::header("Alice", 2000, 1990, "c2"),
        common::numstat("1", "0", "{B.ts => C.ts}"),
    ]);

    let mut session = IngestSession::quiet("repo");
    session.ingest_log(&batch1);
    session.ingest_log(&batch2);

    let history = session.finish(&["C.ts".to_string()]);

    assert_eq!(history.chains.len(), 1);
    let chain = &history.chains[0];
    assert_eq!(chain.len(), 3);
    assert_eq!(chain[0].to_name.as_deref(), Some("repo/C.ts"));
    assert_eq!(chain[1].from_name.as_deref(), Some("repo/B.ts"));
    assert_eq!(chain[1].timestamp, 2000);
    assert_eq!(chain[2].from_name.as_deref(), Some("repo/A.ts"));
    // B.ts's validity ended when it became C.ts
    assert_eq!(chain[2].timestamp_end, 2000);
}

#[test]
fn test_derived_intervals_feed_chain_builder() {
    let events = vec![
        RenameEvent {
            from_name: Some("A.ts".to_string()),
            to_name: Some("B.ts".to_string()),
            timestamp: 1000,
            timestamp_author: 990,
        },
        RenameEvent {
            from_name: Some("B.ts".to_string()),
            to_name: Some("C.ts".to_string()),
            timestamp: 2000,
            timestamp_author: 1990,
        },
    ];

    let intervals = derive_intervals(&events);
    let chains = build_chains(&intervals, &files(&["C.ts"]));

    assert_eq!(chains[0].len(), 3);
    // Head timestamp comes from the newest interval's open end
    assert_eq!(chains[0][0].timestamp, i64::MAX);
}
