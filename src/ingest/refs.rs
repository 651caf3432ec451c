//! Ref listing classification
//!
//! Parses `git show-ref`-style output (`<hash> <refpath>` per line) into
//! ordered branch and tag maps. Remote refs and malformed lines are expected
//! noise and ignored.

use crate::model::RefSet;

const HEADS_PREFIX: &str = "refs/heads/";
const TAGS_PREFIX: &str = "refs/tags/";

/// Parses a ref listing into ordered Branch/Tag maps.
///
/// Branches are presented with "main" first if present, else "master", then
/// the rest alphabetically. Tags are presented by descending parsed version;
/// tags that do not parse as `[v]MAJOR.MINOR.PATCH` come last, alphabetically.
pub fn parse_refs(text: &str) -> RefSet {
    let mut branches: Vec<(String, String)> = Vec::new();
    let mut tags: Vec<(String, String)> = Vec::new();

    for line in text.lines() {
        let mut tokens = line.split_whitespace();
        let (Some(hash), Some(ref_path)) = (tokens.next(), tokens.next()) else {
            continue;
        };
        if let Some(name) = ref_path.strip_prefix(HEADS_PREFIX) {
            branches.push((name.to_string(), hash.to_string()));
        } else if let Some(name) = ref_path.strip_prefix(TAGS_PREFIX) {
            tags.push((name.to_string(), hash.to_string()));
        }
        // refs/remotes/ and anything else: ignored.
    }

    branches.sort_by(|(a, _), (b, _)| branch_rank(a).cmp(&branch_rank(b)).then(a.cmp(b)));
    tags.sort_by(|(a, _), (b, _)| compare_tags(a, b));

    let mut refs = RefSet::default();
    refs.branches.extend(branches);
    refs.tags.extend(tags);
    refs
}

/// Default branches sort ahead of everything else.
fn branch_rank(name: &str) -> u8 {
    match name {
        "main" => 0,
        "master" => 1,
        _ => 2,
    }
}

/// Descending version order; unversioned tags after versioned ones.
fn compare_tags(a: &str, b: &str) -> std::cmp::Ordering {
    match (parse_version(a), parse_version(b)) {
        (Some(va), Some(vb)) => vb.cmp(&va),
        (Some(_), None) => std::cmp::Ordering::Less,
        (None, Some(_)) => std::cmp::Ordering::Greater,
        (None, None) => a.cmp(b),
    }
}

/// Parses a `MAJOR.MINOR.PATCH` tag, tolerating a leading `v`/`V`.
fn parse_version(tag: &str) -> Option<(u64, u64, u64)> {
    let trimmed = tag.trim();
    let trimmed = trimmed
        .strip_prefix('v')
        .or_else(|| trimmed.strip_prefix('V'))
        .unwrap_or(trimmed);
    let mut parts = trimmed.split('.');
    let major = parts.next()?.parse::<u64>().ok()?;
    let minor = parts.next()?.parse::<u64>().ok()?;
    let patch = parts.next()?.parse::<u64>().ok()?;
    if parts.next().is_some() {
        return None;
    }
    Some((major, minor, patch))
}
