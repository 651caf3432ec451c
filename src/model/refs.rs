use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Classified refs: name -> hash, in presentation order.
///
/// Branches put "main" (else "master") first, then the rest alphabetically.
/// Tags are ordered by descending parsed version. A name never appears in
/// both maps for one input, since branches and tags come from disjoint ref
/// path prefixes.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RefSet {
    #[serde(rename = "Branches")]
    pub branches: IndexMap<String, String>,
    #[serde(rename = "Tags")]
    pub tags: IndexMap<String, String>,
}

impl RefSet {
    pub fn is_empty(&self) -> bool {
        self.branches.is_empty() && self.tags.is_empty()
    }
}
