//! History source trait
//!
//! The engine never invokes git itself; raw log text, ref listings and the
//! current file tree come from an external collaborator behind this trait.
//! [`DirSource`] reads previously captured output from a directory, which is
//! what the CLI and the end-to-end tests use.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

/// Supplies the raw textual inputs for one ingestion run.
pub trait HistorySource {
    /// Raw log batches, e.g. one per branch. Each is parsed and merged
    /// independently.
    fn log_batches(&self) -> Result<Vec<String>>;

    /// Raw ref listing (`<hash> <refpath>` lines). Empty when unavailable.
    fn ref_listing(&self) -> Result<String>;

    /// Repo-relative paths of the files that exist at HEAD.
    fn current_files(&self) -> Result<Vec<String>>;
}

/// Reads captured git output from a directory:
///
/// - `log*.txt` — one log batch per file, in name order
/// - `refs.txt` — ref listing (optional)
/// - `files.txt` — current file tree, one path per line (optional)
pub struct DirSource {
    dir: PathBuf,
}

impl DirSource {
    pub fn new(dir: &Path) -> Self {
        Self {
            dir: dir.to_path_buf(),
        }
    }

    fn read_optional(&self, name: &str) -> Result<String> {
        let path = self.dir.join(name);
        if !path.exists() {
            return Ok(String::new());
        }
        fs::read_to_string(&path).with_context(|| format!("Failed to read {}", path.display()))
    }
}

impl HistorySource for DirSource {
    fn log_batches(&self) -> Result<Vec<String>> {
        let entries = fs::read_dir(&self.dir)
            .with_context(|| format!("Failed to read input directory {}", self.dir.display()))?;

        let mut paths: Vec<PathBuf> = entries
            .filter_map(|e| e.ok())
            .map(|e| e.path())
            .filter(|p| {
                p.file_name()
                    .and_then(|n| n.to_str())
                    .is_some_and(|n| n.starts_with("log") && n.ends_with(".txt"))
            })
            .collect();
        paths.sort();

        let mut batches = Vec::with_capacity(paths.len());
        for path in paths {
            let text = fs::read_to_string(&path)
                .with_context(|| format!("Failed to read {}", path.display()))?;
            batches.push(text);
        }
        Ok(batches)
    }

    fn ref_listing(&self) -> Result<String> {
        self.read_optional("refs.txt")
    }

    fn current_files(&self) -> Result<Vec<String>> {
        let text = self.read_optional("files.txt")?;
        Ok(text
            .lines()
            .map(str::trim)
            .filter(|l| !l.is_empty())
            .map(str::to_string)
            .collect())
    }
}
