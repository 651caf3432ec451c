use serde::{Deserialize, Serialize};

/// How a numstat line touched its file.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum FileMode {
    Modify,
    Create,
    Delete,
    RenameTarget,
}

/// One file touched by a commit, as reported by a numstat line.
///
/// Binary files carry the sentinel insertions=1, deletions=0 rather than 0/0,
/// so downstream size metrics still see the file as touched.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct FileChange {
    /// Repo-root-prefixed path, e.g. "my-repo/src/main.rs"
    pub path: String,
    pub insertions: u32,
    pub deletions: u32,
    pub is_binary: bool,
    pub mode: FileMode,
}

/// One parsed revision with author/time metadata and its file-level changes.
///
/// Immutable once its batch has been ingested; keyed by hash in the session's
/// accumulating commit map.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CommitRecord {
    pub hash: String,
    pub author: String,
    /// Committer time, unix seconds
    pub committer_time: i64,
    /// Author time, unix seconds
    pub author_time: i64,
    pub file_changes: Vec<FileChange>,
}

impl CommitRecord {
    pub fn new(hash: &str, author: &str, committer_time: i64, author_time: i64) -> Self {
        Self {
            hash: hash.to_string(),
            author: author.to_string(),
            committer_time,
            author_time,
            file_changes: Vec::new(),
        }
    }
}
