pub mod prefixes;

pub use prefixes::{resolve_prefixed, KNOWN_PREFIXES};

use serde::{Deserialize, Serialize};

/// A related work cited by a registration record
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Reference {
    /// Relation to the registered dataset, e.g. "IsSupplementTo"
    pub reftype: String,
    pub name: String,
    pub citation: String,
    /// Prefixed identifier such as "doi:10.1234/abc" or "arxiv:2403.12345"
    pub id: String,
}

impl Reference {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            ..Self::default()
        }
    }

    /// Split `id` on its first colon into (prefix, value)
    pub fn parts(&self) -> Option<(&str, &str)> {
        self.id.split_once(':')
    }

    /// Canonical URL of the referenced work, empty if the identifier is
    /// malformed or its prefix is unknown
    pub fn get_url(&self) -> String {
        self.parts()
            .and_then(|(prefix, value)| resolve_prefixed(prefix, value))
            .unwrap_or_default()
    }
}
