mod cli;

use anyhow::{Context, Result};
use clap::Parser;
use serde::Serialize;
use std::io;

use cli::Cli;
use repolog::ingest::{
    DirSource, HistoryBatch, HistorySource, IndicatifProgress, IngestSession, NoopProgress,
    ProgressReporter, TimeInterval, time_intervals,
};

/// Full output of one run: the history batch plus the reporting timeline.
#[derive(Serialize)]
struct Report {
    history: HistoryBatch,
    timeline: Vec<TimeInterval>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let repo_name = match cli.repo_name {
        Some(name) => name,
        None => cli
            .input_dir
            .file_name()
            .and_then(|n| n.to_str())
            .context("Could not derive a repo name from the input directory")?
            .to_string(),
    };

    let source = DirSource::new(&cli.input_dir);
    let batches = source.log_batches()?;
    if batches.is_empty() {
        eprintln!(
            "Warning: no log*.txt batches found in {}",
            cli.input_dir.display()
        );
    }

    let mut session = if cli.profile {
        IngestSession::profiling(&repo_name)
    } else if cli.quiet {
        IngestSession::quiet(&repo_name)
    } else {
        IngestSession::new(&repo_name)
    };

    let progress: Box<dyn ProgressReporter> = if cli.quiet || cli.profile {
        Box::new(NoopProgress)
    } else {
        Box::new(IndicatifProgress)
    };

    let added = session.ingest_log_batches(&batches, progress.as_ref());
    if added == 0 && batches.iter().any(|b| !b.trim().is_empty()) {
        eprintln!("Warning: log batches contained no parseable commits");
    }

    session.ingest_refs(&source.ref_listing()?);

    let timeline = match session.time_range() {
        Some((min_time, max_time)) => time_intervals(cli.granularity, min_time, max_time),
        None => Vec::new(),
    };

    let current_files = source.current_files()?;
    let history = session.finish(&current_files);

    if !cli.quiet {
        eprintln!(
            "Ingested {} commits, {} rename events, {} chains",
            history.commits.len(),
            history.renames.len(),
            history.chains.len()
        );
    }

    serde_json::to_writer_pretty(io::stdout().lock(), &Report { history, timeline })
        .context("Failed to write report")?;
    println!();

    Ok(())
}
