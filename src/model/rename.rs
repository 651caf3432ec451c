use serde::{Deserialize, Serialize};

/// A rename fact: "name X became name Y at time T".
///
/// `from_name == None` marks a file creation, `to_name == None` a deletion.
/// Events are appended to a log during parsing and consumed once when the
/// session derives intervals and builds chains.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct RenameEvent {
    pub from_name: Option<String>,
    pub to_name: Option<String>,
    /// Committer time, unix seconds
    pub timestamp: i64,
    /// Author time, unix seconds
    pub timestamp_author: i64,
}

/// A rename event bounded by the validity window of `to_name`.
///
/// `timestamp_end` is the moment `to_name` stopped being the file's name
/// (the timestamp of the next rename in the chain), or `i64::MAX` while the
/// name is still live.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct RenameInterval {
    pub from_name: Option<String>,
    pub to_name: Option<String>,
    pub timestamp: i64,
    pub timestamp_end: i64,
}

impl RenameInterval {
    /// Synthetic head interval representing a file's current identity.
    pub fn current(path: &str) -> Self {
        Self {
            from_name: Some(path.to_string()),
            to_name: Some(path.to_string()),
            timestamp: i64::MAX,
            timestamp_end: i64::MAX,
        }
    }
}

/// The ordered history of names a currently-existing file has held.
///
/// Index 0 is the synthetic current-identity record; subsequent entries walk
/// backward in time.
pub type RenameChain = Vec<RenameInterval>;
