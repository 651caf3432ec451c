//! Rename chain construction
//!
//! Turns the accumulated rename event log into validity intervals, then
//! reconstructs, for every file that exists today, the ordered history of
//! names it has held by walking backward through the interval list.
//!
//! Intervals are grouped by target name up front and claimed through an
//! index set; the shared interval list is never mutated, so chains for
//! different files could be built independently.

use std::collections::VecDeque;

use rustc_hash::FxHashMap;

use crate::model::{RenameChain, RenameEvent, RenameInterval};

/// Derives newest-first validity intervals from the rename event log.
///
/// An event's `timestamp_end` is the timestamp of the newest later event
/// that renamed its `to_name` away, or `i64::MAX` while the name is still
/// live.
pub fn derive_intervals(events: &[RenameEvent]) -> Vec<RenameInterval> {
    let mut ordered: Vec<&RenameEvent> = events.iter().collect();
    ordered.sort_by(|a, b| b.timestamp.cmp(&a.timestamp));

    // Walking newest to oldest: once we pass an event, its from_name stopped
    // being valid at that event's timestamp.
    let mut ends_at: FxHashMap<&str, i64> = FxHashMap::default();
    let mut intervals = Vec::with_capacity(ordered.len());

    for event in ordered {
        let timestamp_end = event
            .to_name
            .as_deref()
            .and_then(|name| ends_at.get(name).copied())
            .unwrap_or(i64::MAX);
        if let Some(from) = event.from_name.as_deref() {
            ends_at.insert(from, event.timestamp);
        }
        intervals.push(RenameInterval {
            from_name: event.from_name.clone(),
            to_name: event.to_name.clone(),
            timestamp: event.timestamp,
            timestamp_end,
        });
    }

    intervals
}

/// Builds one rename chain per currently-existing file.
///
/// `intervals` must be ordered newest-first (see [`derive_intervals`]). Each
/// interval can be claimed by at most one chain. A path absent from
/// `current_files` never produces a chain, even if it appears as a rename
/// target somewhere in the list.
pub fn build_chains(intervals: &[RenameInterval], current_files: &[String]) -> Vec<RenameChain> {
    // Multimap target name -> interval indices, newest first. Deletion
    // intervals (to_name == None) can never match a live name and are left
    // out entirely.
    let mut by_target: FxHashMap<&str, VecDeque<usize>> = FxHashMap::default();
    for (idx, interval) in intervals.iter().enumerate() {
        if let Some(target) = interval.to_name.as_deref() {
            by_target.entry(target).or_default().push_back(idx);
        }
    }

    let mut claimed = vec![false; intervals.len()];
    let mut chains = Vec::with_capacity(current_files.len());

    for file in current_files {
        let mut chain: RenameChain = vec![RenameInterval::current(file)];
        let mut cursor = file.clone();

        loop {
            let Some(found) = claim_newest(&mut by_target, &mut claimed, &cursor) else {
                break;
            };
            let interval = intervals[found].clone();
            if chain.len() == 1 {
                // The current name became valid when its predecessor ended.
                chain[0].timestamp = interval.timestamp_end;
            }
            let next = interval.from_name.clone();
            chain.push(interval);
            match next {
                // Creation fact: the chain is complete.
                None => break,
                Some(from) => cursor = from,
            }
        }

        chains.push(chain);
    }

    chains
}

/// Pops the most recent unclaimed interval whose target is `name`.
fn claim_newest(
    by_target: &mut FxHashMap<&str, VecDeque<usize>>,
    claimed: &mut [bool],
    name: &str,
) -> Option<usize> {
    let queue = by_target.get_mut(name)?;
    while let Some(idx) = queue.pop_front() {
        if !claimed[idx] {
            claimed[idx] = true;
            return Some(idx);
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    fn event(from: Option<&str>, to: Option<&str>, ts: i64) -> RenameEvent {
        RenameEvent {
            from_name: from.map(str::to_string),
            to_name: to.map(str::to_string),
            timestamp: ts,
            timestamp_author: ts - 10,
        }
    }

    #[test]
    fn test_derive_intervals_orders_newest_first() {
        let events = vec![
            event(Some("A.ts"), Some("B.ts"), 1000),
            event(Some("B.ts"), Some("C.ts"), 2000),
        ];
        let intervals = derive_intervals(&events);
        assert_eq!(intervals[0].to_name.as_deref(), Some("C.ts"));
        assert_eq!(intervals[0].timestamp_end, i64::MAX);
        // B.ts stopped being valid when it was renamed to C.ts at t=2000
        assert_eq!(intervals[1].to_name.as_deref(), Some("B.ts"));
        assert_eq!(intervals[1].timestamp_end, 2000);
    }

    #[test]
    fn test_derive_intervals_unrelated_names_stay_open() {
        let events = vec![
            event(Some("A.ts"), Some("B.ts"), 1000),
            event(Some("X.ts"), Some("Y.ts"), 1500),
        ];
        let intervals = derive_intervals(&events);
        assert!(intervals.iter().all(|iv| iv.timestamp_end == i64::MAX));
    }

    #[test]
    fn test_empty_interval_list_yields_single_element_chains() {
        let chains = build_chains(&[], &["a.ts".to_string(), "b.ts".to_string()]);
        assert_eq!(chains.len(), 2);
        assert_eq!(chains[0].len(), 1);
        assert_eq!(chains[0][0].from_name.as_deref(), Some("a.ts"));
        assert_eq!(chains[0][0].to_name.as_deref(), Some("a.ts"));
    }

    #[test]
    fn test_interval_claimed_by_one_chain_only() {
        let intervals = vec![RenameInterval {
            from_name: Some("A.ts".to_string()),
            to_name: Some("B.ts".to_string()),
            timestamp: 1000,
            timestamp_end: 2000,
        }];
        // The same current name listed twice: only the first walk claims the
        // interval.
        let chains = build_chains(&intervals, &["B.ts".to_string(), "B.ts".to_string()]);
        assert_eq!(chains[0].len(), 2);
        assert_eq!(chains[1].len(), 1);
    }
}
