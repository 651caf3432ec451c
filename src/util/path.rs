use std::borrow::Cow;

/// Collapses doubled path separators left behind by splicing rename tokens
/// with empty segments (e.g. `{ => new}` yields "prefix//new").
///
/// Borrows when the path is already clean.
pub fn collapse_slashes(path: &str) -> Cow<'_, str> {
    if !path.contains("//") {
        return Cow::Borrowed(path);
    }
    let mut out = String::with_capacity(path.len());
    let mut prev_slash = false;
    for c in path.chars() {
        if c == '/' {
            if prev_slash {
                continue;
            }
            prev_slash = true;
        } else {
            prev_slash = false;
        }
        out.push(c);
    }
    Cow::Owned(out)
}

/// Prefixes a repo-relative path with the repo root name, collapsing any
/// doubled separators in the result.
pub fn join_repo_path(repo_root: &str, rel: &str) -> String {
    collapse_slashes(&format!("{}/{}", repo_root, rel.trim())).into_owned()
}
