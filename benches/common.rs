// Shared benchmark helpers
// Functions here are used across different benchmark files
#![allow(dead_code)]

use repolog::model::{RenameEvent, RenameInterval};

/// Generate log text with `commits` commits touching `files_per_commit` files,
/// sprinkling a rename into every tenth commit.
pub fn generate_log(commits: usize, files_per_commit: usize) -> String {
    let mut text = String::new();
    for c in 0..commits {
        let ts = 1_700_000_000 + (c as i64) * 60;
        text.push_str(&format!(
            "\"<|Author {}|><|{} {}|><|hash{:08x}|>\"\n",
            c % 7,
            ts,
            ts - 10,
            c
        ));
        for f in 0..files_per_commit {
            if f == 0 && c % 10 == 9 {
                text.push_str(&format!(
                    "2\t1\tsrc/{{mod_{}/old_{}.rs => mod_{}/new_{}.rs}}\n",
                    c % 5,
                    c,
                    c % 5,
                    c
                ));
            } else {
                text.push_str(&format!("3\t1\tsrc/mod_{}/file_{}.rs\n", f % 5, f));
            }
        }
    }
    text
}

/// Generate a long rename history: `chains` files each renamed `hops` times.
pub fn generate_rename_events(chains: usize, hops: usize) -> Vec<RenameEvent> {
    let mut events = Vec::with_capacity(chains * hops);
    for file in 0..chains {
        for hop in 0..hops {
            events.push(RenameEvent {
                from_name: Some(format!("repo/src/file_{file}_v{hop}.rs")),
                to_name: Some(format!("repo/src/file_{}_v{}.rs", file, hop + 1)),
                timestamp: 1_700_000_000 + (hop as i64) * 3600,
                timestamp_author: 1_700_000_000 + (hop as i64) * 3600 - 10,
            });
        }
    }
    events
}

/// The current names the generated rename history ends at.
pub fn final_names(chains: usize, hops: usize) -> Vec<String> {
    (0..chains)
        .map(|file| format!("repo/src/file_{file}_v{hops}.rs"))
        .collect()
}

/// Pre-derived intervals for chain-building benchmarks.
pub fn generate_intervals(chains: usize, hops: usize) -> Vec<RenameInterval> {
    repolog::ingest::derive_intervals(&generate_rename_events(chains, hops))
}
