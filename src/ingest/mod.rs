//! History ingestion engine
//!
//! Converts raw git log / ref text into normalized history records.
//!
//! # Architecture
//!
//! The engine is organized into layers:
//!
//! - **log_parser**: pure log-text parsing into a [`LogBatch`] delta
//! - **rename_path**: brace/arrow rename token resolution
//! - **chains**: interval derivation and per-file rename chain construction
//! - **refs**: branch/tag classification and ordering
//! - **buckets**: calendar time buckets for reporting
//! - **progress**: progress reporting abstraction
//! - **source**: trait for the external collaborator supplying raw text
//! - **session**: [`IngestSession`], the accumulating orchestrator

mod buckets;
mod chains;
mod log_parser;
mod progress;
mod refs;
mod rename_path;
mod source;

pub use buckets::{Granularity, TimeInterval, time_intervals};
pub use chains::{build_chains, derive_intervals};
pub use log_parser::{LogBatch, parse_log};
pub use progress::{IndicatifProgress, NoopProgress, ProgressHandle, ProgressReporter};
pub use refs::parse_refs;
pub use rename_path::{ResolvedRename, resolve_rename};
pub use source::{DirSource, HistorySource};

use std::time::Instant;

use rustc_hash::FxHashMap;
use serde::Serialize;

use crate::model::{CommitRecord, RefSet, RenameChain, RenameEvent};
use crate::util::join_repo_path;

/// Everything one ingestion run hands to the external aggregation store.
#[derive(Debug, Default, Serialize)]
pub struct HistoryBatch {
    pub commits: FxHashMap<String, CommitRecord>,
    pub renames: Vec<RenameEvent>,
    pub chains: Vec<RenameChain>,
    pub refs: RefSet,
    pub skipped_headers: usize,
    pub skipped_numstat: usize,
}

/// Accumulating ingestion session for one repository.
///
/// Log batches (e.g. one per branch) are parsed and merged as they arrive;
/// a commit hash seen again in a later batch reuses the existing record
/// instead of appending duplicate file changes. [`IngestSession::finish`]
/// runs chain construction over the full accumulated rename log.
pub struct IngestSession {
    repo_name: String,
    verbose: bool,
    profile: bool,
    commits: FxHashMap<String, CommitRecord>,
    renames: Vec<RenameEvent>,
    refs: RefSet,
    skipped_headers: usize,
    skipped_numstat: usize,
}

impl IngestSession {
    pub fn new(repo_name: &str) -> Self {
        Self::with_flags(repo_name, true, false)
    }

    /// Create a quiet session (no logging output, used by tests/benchmarks)
    pub fn quiet(repo_name: &str) -> Self {
        Self::with_flags(repo_name, false, false)
    }

    /// Create a profiling session (detailed timing output)
    pub fn profiling(repo_name: &str) -> Self {
        Self::with_flags(repo_name, true, true)
    }

    fn with_flags(repo_name: &str, verbose: bool, profile: bool) -> Self {
        Self {
            repo_name: repo_name.to_string(),
            verbose,
            profile,
            commits: FxHashMap::default(),
            renames: Vec::new(),
            refs: RefSet::default(),
            skipped_headers: 0,
            skipped_numstat: 0,
        }
    }

    pub fn commit_count(&self) -> usize {
        self.commits.len()
    }

    /// Parse one log batch and merge it into the session.
    ///
    /// Returns the number of commits newly added; repeated hashes are reused,
    /// not appended to.
    pub fn ingest_log(&mut self, text: &str) -> usize {
        let phase_start = Instant::now();
        let batch = parse_log(text, &self.repo_name);

        let mut added = 0;
        for commit in batch.commits {
            self.commits.entry(commit.hash.clone()).or_insert_with(|| {
                added += 1;
                commit
            });
        }
        self.renames.extend(batch.renames);
        self.skipped_headers += batch.skipped_headers;
        self.skipped_numstat += batch.skipped_numstat;

        self.profile_phase(
            &format!("Parse batch ({} new commits)", added),
            phase_start,
        );
        if added == 0 && !text.trim().is_empty() {
            self.log("Warning: no commits parsed from non-empty batch");
        }
        added
    }

    /// Ingest several batches with progress reporting.
    pub fn ingest_log_batches(
        &mut self,
        batches: &[String],
        progress: &dyn ProgressReporter,
    ) -> usize {
        let pb = progress.start("Ingesting", batches.len() as u64);
        let mut added = 0;
        for batch in batches {
            added += self.ingest_log(batch);
            pb.inc(1);
        }
        pb.finish();
        added
    }

    /// Classify the ref listing for this repository.
    pub fn ingest_refs(&mut self, text: &str) {
        let phase_start = Instant::now();
        self.refs = parse_refs(text);
        self.profile_phase(
            &format!(
                "Classify refs ({} branches, {} tags)",
                self.refs.branches.len(),
                self.refs.tags.len()
            ),
            phase_start,
        );
    }

    /// Committer-time range across all accumulated commits.
    pub fn time_range(&self) -> Option<(i64, i64)> {
        let mut range: Option<(i64, i64)> = None;
        for commit in self.commits.values() {
            let t = commit.committer_time;
            range = Some(match range {
                None => (t, t),
                Some((lo, hi)) => (lo.min(t), hi.max(t)),
            });
        }
        range
    }

    /// Complete the session: derive rename intervals from the accumulated
    /// event log and build one chain per currently-existing file.
    ///
    /// `current_files` are repo-relative; they are prefixed with the repo
    /// name here to match the paths produced by parsing.
    pub fn finish(self, current_files: &[String]) -> HistoryBatch {
        self.log(&format!(
            "Building rename chains for {} files ({} rename events)...",
            current_files.len(),
            self.renames.len()
        ));

        let phase_start = Instant::now();
        let intervals = derive_intervals(&self.renames);
        self.profile_phase(
            &format!("Derive intervals ({} events)", self.renames.len()),
            phase_start,
        );

        let prefixed: Vec<String> = current_files
            .iter()
            .map(|f| join_repo_path(&self.repo_name, f))
            .collect();

        let phase_start = Instant::now();
        let chains = build_chains(&intervals, &prefixed);
        self.profile_phase(&format!("Build chains ({} files)", prefixed.len()), phase_start);

        HistoryBatch {
            commits: self.commits,
            renames: self.renames,
            chains,
            refs: self.refs,
            skipped_headers: self.skipped_headers,
            skipped_numstat: self.skipped_numstat,
        }
    }

    fn log(&self, msg: &str) {
        if self.verbose {
            eprintln!("{}", msg);
        }
    }

    fn profile_phase(&self, name: &str, start: Instant) {
        if self.profile {
            eprintln!("[PROFILE] {}: {:?}", name, start.elapsed());
        }
    }
}
