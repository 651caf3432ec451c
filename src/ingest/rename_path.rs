//! Rename token resolution
//!
//! Git's numstat output encodes renames in two lexical forms:
//!
//! - brace form: `src/{old.ts => new.ts}` (old/new may be empty)
//! - arrow form: `old/path.ts => new/path.ts`
//!
//! Both resolve to a (from, to) path pair prefixed with the repo root name.

use crate::model::RenameEvent;
use crate::util::join_repo_path;

/// The outcome of resolving one rename-bearing path token.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct ResolvedRename {
    /// Repo-root-prefixed path the file now lives at.
    pub to_path: String,
    /// The rename fact to append to the event log.
    pub event: RenameEvent,
}

/// Resolves a rename-bearing numstat path token.
///
/// Plain tokens never reach this function; the log parser only calls it when
/// the token contains `=>`.
pub fn resolve_rename(
    raw: &str,
    committer_time: i64,
    author_time: i64,
    repo_root: &str,
) -> ResolvedRename {
    let (from_rel, to_rel) = split_rename_token(raw);
    let from_path = join_repo_path(repo_root, &from_rel);
    let to_path = join_repo_path(repo_root, &to_rel);

    ResolvedRename {
        to_path: to_path.clone(),
        event: RenameEvent {
            from_name: Some(from_path),
            to_name: Some(to_path),
            timestamp: committer_time,
            timestamp_author: author_time,
        },
    }
}

/// Splits a rename token into repo-relative (from, to) paths.
fn split_rename_token(raw: &str) -> (String, String) {
    if let Some(open) = raw.find('{') {
        // Innermost brace group: first '}' after the '{'
        if let Some(close_off) = raw[open..].find('}') {
            let close = open + close_off;
            if let Some((old, new)) = split_arrow(&raw[open + 1..close]) {
                let prefix = &raw[..open];
                let suffix = &raw[close + 1..];
                return (
                    format!("{prefix}{old}{suffix}"),
                    format!("{prefix}{new}{suffix}"),
                );
            }
        }
    }
    match split_arrow(raw) {
        Some((from, to)) => (from.to_string(), to.to_string()),
        // Not actually a rename; treat the token as both names
        None => (raw.trim().to_string(), raw.trim().to_string()),
    }
}

/// Splits on the ` => ` separator, tolerating the space-less form git emits
/// when one side is empty (e.g. `{=>newfile.ts}`).
fn split_arrow(s: &str) -> Option<(&str, &str)> {
    let (left, right) = s.split_once("=>")?;
    Some((left.trim(), right.trim()))
}
