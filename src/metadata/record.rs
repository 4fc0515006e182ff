use serde::{Deserialize, Serialize};
use time::Date;

use super::Author;
use crate::reference::Reference;

/// Resource type reported when a record does not set one
pub const DEFAULT_RESOURCE_TYPE: &str = "Dataset";

/// Publisher reported when a record does not set one
pub const DEFAULT_PUBLISHER: &str = "G-Node";

time::serde::format_description!(iso_date, Date, "[year]-[month]-[day]");

/// License attached to a registered dataset
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct License {
    pub name: String,
    pub url: String,
}

/// Metadata collected for a DOI registration request
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RegistrationRecord {
    pub doi: String,
    pub uuid: String,
    pub title: String,
    pub authors: Vec<Author>,
    pub description: String,
    pub keywords: Vec<String>,
    pub references: Vec<Reference>,
    pub funding: Vec<String>,
    pub license: Option<License>,
    pub resource_type: String,
    pub publisher: String,
    #[serde(with = "iso_date::option")]
    pub issued: Option<Date>,
}

impl RegistrationRecord {
    /// Resource type of the record, `DEFAULT_RESOURCE_TYPE` when unset
    pub fn get_type(&self) -> &str {
        if self.resource_type.is_empty() {
            DEFAULT_RESOURCE_TYPE
        } else {
            &self.resource_type
        }
    }

    pub fn publisher(&self) -> &str {
        if self.publisher.is_empty() {
            DEFAULT_PUBLISHER
        } else {
            &self.publisher
        }
    }

    pub fn year(&self) -> Option<i32> {
        self.issued.map(|date| date.year())
    }

    /// Issue date as YYYY-MM-DD, empty when unset
    pub fn iso_date(&self) -> String {
        self.issued.map(|date| date.to_string()).unwrap_or_default()
    }

    /// Citation line: "Doe J, Roe R (2020): Title. G-Node. https://doi.org/<doi>"
    pub fn citation(&self) -> String {
        let authors = self
            .authors
            .iter()
            .map(Author::short_name)
            .collect::<Vec<_>>()
            .join(", ");
        let year = self
            .year()
            .map(|y| y.to_string())
            .unwrap_or_else(|| "n.d.".to_string());

        let authors = if authors.is_empty() {
            String::new()
        } else {
            format!("{} ", authors)
        };

        format!(
            "{}({}): {}. {}. https://doi.org/{}",
            authors,
            year,
            self.title,
            self.publisher(),
            self.doi
        )
    }

    /// Reference URLs that could be resolved, in record order
    pub fn reference_urls(&self) -> Vec<String> {
        self.references
            .iter()
            .map(Reference::get_url)
            .filter(|url| !url.is_empty())
            .collect()
    }
}
