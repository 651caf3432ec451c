// Shared test fixtures for integration tests
// Functions here are used across different test files
#![allow(dead_code)]

use std::fs;
use std::path::Path;

use tempfile::TempDir;

/// Build a quoted log header line for the given author/times/hash.
pub fn header(author: &str, committer_time: i64, author_time: i64, hash: &str) -> String {
    format!("\"<|{author}|><|{committer_time} {author_time}|><|{hash}|>\"")
}

/// Build a numstat line.
pub fn numstat(insertions: &str, deletions: &str, path: &str) -> String {
    format!("{insertions}\t{deletions}\t{path}")
}

/// Assemble a log batch from lines.
pub fn log_text(lines: &[String]) -> String {
    let mut text = lines.join("\n");
    text.push('\n');
    text
}

/// A simple two-commit batch touching a couple of files.
pub fn sample_batch() -> String {
    log_text(&[
        header("Alice", 1700000000, 1699999990, "abc123"),
        numstat("3", "1", "src/index.ts"),
        numstat("-", "-", "image.png"),
        header("Bob", 1700001000, 1700000990, "def456"),
        numstat("5", "2", "src/utils.ts"),
    ])
}

/// Write a captured-output fixture directory for DirSource.
///
/// `logs` become log-0.txt, log-1.txt, ... in order.
pub fn write_fixture_dir(logs: &[&str], refs: &str, files: &[&str]) -> TempDir {
    let dir = TempDir::new().unwrap();
    for (i, log) in logs.iter().enumerate() {
        write(dir.path(), &format!("log-{i}.txt"), log);
    }
    if !refs.is_empty() {
        write(dir.path(), "refs.txt", refs);
    }
    if !files.is_empty() {
        let mut listing = files.join("\n");
        listing.push('\n');
        write(dir.path(), "files.txt", &listing);
    }
    dir
}

fn write(dir: &Path, name: &str, content: &str) {
    fs::write(dir.join(name), content).unwrap();
}
