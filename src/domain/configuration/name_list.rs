//! Comma-separated name lists (`datasets`, `dependencies`, `types`).

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use super::scalar;

/// A name list as written in the registry.
///
/// The canonical form is a comma-separated string (`"d1,d2,"`); a YAML
/// sequence is accepted as well. Numeric scalars are read as their text.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(untagged)]
pub enum NameList {
    Joined(#[serde(deserialize_with = "scalar::string")] String),
    Items(#[serde(deserialize_with = "scalar::strings")] Vec<String>),
}

impl NameList {
    /// Resolve to the set of non-empty, trimmed tokens.
    ///
    /// Duplicates collapse; declaration order is not kept. Whitespace around
    /// a token is dropped, so `"d1, d2"` names `d1` and `d2`, not `" d2"`.
    pub fn to_set(&self) -> BTreeSet<String> {
        match self {
            NameList::Joined(raw) => split_names(raw),
            NameList::Items(items) => items.iter().flat_map(|item| split_names(item)).collect(),
        }
    }
}

/// Split a comma-separated string into its set of non-empty tokens.
pub fn split_names(raw: &str) -> BTreeSet<String> {
    raw.split(',').map(str::trim).filter(|token| !token.is_empty()).map(String::from).collect()
}
