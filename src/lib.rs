//! Metadata utilities for DOI registration of research data repositories.
//!
//! Pure helpers for repository identifiers, author and citation rendering,
//! reference URL resolution, plus an async probe that asks a DOI registry
//! whether a DOI is already registered.

pub mod common;
pub mod metadata;
pub mod reference;
pub mod registry;

pub use metadata::{
    escape_xml, repo_path_to_uuid, Author, License, NamedIdentifier, RegistrationRecord,
    DEFAULT_PUBLISHER, DEFAULT_RESOURCE_TYPE,
};
pub use reference::Reference;
pub use registry::{
    is_registered_doi, DoiOrgLookup, LookupError, RegistrationStatus, RegistryChecker,
    RegistryLookup,
};
