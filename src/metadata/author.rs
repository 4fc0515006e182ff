use lazy_static::lazy_static;
use regex::Regex;
use serde::{Deserialize, Serialize};

lazy_static! {
    /// ORCID iD: four blocks of four digits separated by dashes, the final
    /// character may be the checksum `X`
    pub static ref ORCID_PATTERN: Regex = Regex::new(r"(?:\d{4}-){3}\d{3}[\dX]").unwrap();
}

pub const ORCID_URI: &str = "https://orcid.org/";
pub const ORCID_SCHEME: &str = "ORCID";

/// An external identifier that passed validation, e.g. an ORCID iD
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NamedIdentifier {
    pub uri: String,
    pub scheme: String,
    pub id: String,
}

/// A creator entry of a registration record.
///
/// `affiliation` and `id` are optional; an empty string means absent.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Author {
    #[serde(alias = "firstname")]
    pub first_name: String,
    #[serde(alias = "lastname")]
    pub last_name: String,
    pub affiliation: String,
    pub id: String,
}

impl Author {
    pub fn new(last_name: impl Into<String>, first_name: impl Into<String>) -> Self {
        Self {
            last_name: last_name.into(),
            first_name: first_name.into(),
            ..Self::default()
        }
    }

    pub fn with_affiliation(mut self, affiliation: impl Into<String>) -> Self {
        self.affiliation = affiliation.into();
        self
    }

    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = id.into();
        self
    }

    /// Render as "Last, First; Affiliation; ID", skipping absent fields
    pub fn render_author(&self) -> String {
        let mut rendered = format!("{}, {}", self.last_name, self.first_name);
        for part in [&self.affiliation, &self.id] {
            if !part.is_empty() {
                rendered.push_str("; ");
                rendered.push_str(part);
            }
        }
        rendered
    }

    /// Short form used in citations: "Last F" or just "Last"
    pub fn short_name(&self) -> String {
        match self.first_name.chars().next() {
            Some(initial) => format!("{} {}", self.last_name, initial),
            None => self.last_name.clone(),
        }
    }

    /// Extract a usable ORCID from the free-form `id` field.
    ///
    /// Only ids labelled "orcid" (any case) are considered, e.g.
    /// "ORCID:0000-0002-1825-0097".
    pub fn valid_id(&self) -> Option<NamedIdentifier> {
        if !self.id.to_lowercase().starts_with("orcid") {
            return None;
        }
        ORCID_PATTERN.find(&self.id).map(|m| NamedIdentifier {
            uri: ORCID_URI.to_string(),
            scheme: ORCID_SCHEME.to_string(),
            id: m.as_str().to_string(),
        })
    }
}
