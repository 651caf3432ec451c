//! Git log parser
//!
//! Consumes the raw text of a `git log` invocation formatted with the quoted
//! header `"<|AUTHOR|><|COMMITTERTIME AUTHORTIME|><|HASH|>"` followed by
//! numstat lines, and produces a pure [`LogBatch`] delta. Merging deltas into
//! the accumulating session state happens in [`crate::ingest::IngestSession`],
//! keeping this parser free of hidden aliasing.

use crate::model::{CommitRecord, FileChange, FileMode, RenameEvent};
use crate::util::join_repo_path;

use super::rename_path::resolve_rename;

/// The parsed delta of one log ingestion call.
#[derive(Debug, Default)]
pub struct LogBatch {
    /// Commits in the order they appeared in the log text.
    pub commits: Vec<CommitRecord>,
    /// Rename/create/delete facts, in log order.
    pub renames: Vec<RenameEvent>,
    /// Header lines that did not match the three-field grammar.
    pub skipped_headers: usize,
    /// Numstat lines that did not match `digits-or-dash \t digits-or-dash \t path`.
    pub skipped_numstat: usize,
}

/// Parses one batch of log text.
///
/// Malformed headers drop their whole block; malformed numstat lines are
/// skipped individually. Neither aborts the batch.
pub fn parse_log(text: &str, repo_root: &str) -> LogBatch {
    let mut batch = LogBatch::default();
    // The commit whose numstat lines we are currently consuming. None after a
    // malformed header, so the orphaned block is dropped.
    let mut current: Option<CommitRecord> = None;

    for line in text.lines() {
        if line.trim_start().starts_with('"') {
            if let Some(done) = current.take() {
                batch.commits.push(done);
            }
            match parse_header(line) {
                Some(header) => {
                    current = Some(CommitRecord::new(
                        header.hash,
                        header.author,
                        header.committer_time,
                        header.author_time,
                    ));
                }
                None => batch.skipped_headers += 1,
            }
            continue;
        }

        let Some(commit) = current.as_mut() else {
            continue;
        };

        if let Some(rest) = line.strip_prefix(" create mode ") {
            if let Some(path) = mode_line_path(rest) {
                batch.renames.push(RenameEvent {
                    from_name: None,
                    to_name: Some(path.to_string()),
                    timestamp: commit.committer_time,
                    timestamp_author: commit.author_time,
                });
            }
            continue;
        }
        if let Some(rest) = line.strip_prefix(" delete mode ") {
            if let Some(path) = mode_line_path(rest) {
                batch.renames.push(RenameEvent {
                    from_name: Some(path.to_string()),
                    to_name: None,
                    timestamp: commit.committer_time,
                    timestamp_author: commit.author_time,
                });
            }
            continue;
        }

        if line.contains('\t') {
            match parse_numstat(line, commit, repo_root, &mut batch.renames) {
                Some(change) => commit.file_changes.push(change),
                None => batch.skipped_numstat += 1,
            }
        }
        // Anything else (blank separators, summary lines) is ignored.
    }

    if let Some(done) = current.take() {
        batch.commits.push(done);
    }

    batch
}

struct Header<'a> {
    author: &'a str,
    committer_time: i64,
    author_time: i64,
    hash: &'a str,
}

/// Locates the three header fields via the `<|...|>` delimiter tokens.
///
/// The author may contain arbitrary characters including quotes, so the
/// fields are peeled off from the right rather than split on quotes.
fn parse_header(line: &str) -> Option<Header<'_>> {
    let inner = line
        .trim()
        .strip_prefix("\"<|")?
        .strip_suffix("|>\"")?;
    // inner = AUTHOR|><|CTIME ATIME|><|HASH
    let (rest, hash) = inner.rsplit_once("|><|")?;
    let (author, times) = rest.rsplit_once("|><|")?;
    let (committer, author_t) = times.split_once(' ')?;
    let committer_time: i64 = committer.parse().ok()?;
    let author_time: i64 = author_t.parse().ok()?;
    if hash.is_empty() {
        return None;
    }
    Some(Header {
        author,
        committer_time,
        author_time,
        hash,
    })
}

/// Parses one `INSERTIONS\tDELETIONS\tPATH` line.
///
/// Binary files (`-\t-\t`) record the sentinel insertions=1, deletions=0 so
/// they still register as touched. Rename-bearing paths are resolved and
/// their events appended to the batch's rename log.
fn parse_numstat(
    line: &str,
    commit: &CommitRecord,
    repo_root: &str,
    renames: &mut Vec<RenameEvent>,
) -> Option<FileChange> {
    let mut fields = line.splitn(3, '\t');
    let ins_tok = fields.next()?.trim();
    let del_tok = fields.next()?.trim();
    let path_tok = fields.next()?.trim();
    if path_tok.is_empty() {
        return None;
    }

    let is_binary = ins_tok == "-" && del_tok == "-";
    let (insertions, deletions) = if is_binary {
        (1, 0)
    } else {
        (ins_tok.parse().ok()?, del_tok.parse().ok()?)
    };

    let (path, mode) = if path_tok.contains("=>") {
        let resolved = resolve_rename(
            path_tok,
            commit.committer_time,
            commit.author_time,
            repo_root,
        );
        renames.push(resolved.event);
        (resolved.to_path, FileMode::RenameTarget)
    } else {
        (join_repo_path(repo_root, path_tok), FileMode::Modify)
    };

    Some(FileChange {
        path,
        insertions,
        deletions,
        is_binary,
        mode,
    })
}

/// Extracts the path from the tail of a ` create mode <octal> <path>` line.
fn mode_line_path(rest: &str) -> Option<&str> {
    let (octal, path) = rest.trim().split_once(' ')?;
    if octal.is_empty() || !octal.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    let path = path.trim();
    (!path.is_empty()).then_some(path)
}
