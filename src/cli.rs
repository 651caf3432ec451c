use clap::Parser;
use std::path::PathBuf;

use repolog::ingest::Granularity;

#[derive(Parser, Debug)]
#[command(name = "repolog", about = "Ingest captured git log output into normalized history records")]
pub struct Cli {
    /// Directory with captured git output (log*.txt, refs.txt, files.txt)
    pub input_dir: PathBuf,

    /// Repository name used to prefix file paths (defaults to the directory name)
    #[arg(long)]
    pub repo_name: Option<String>,

    /// Timeline bucket width: day, week, month or year
    #[arg(long, default_value = "month")]
    pub granularity: Granularity,

    /// Print phase timing instead of progress bars
    #[arg(long)]
    pub profile: bool,

    /// Suppress progress and log output
    #[arg(short, long)]
    pub quiet: bool,
}
