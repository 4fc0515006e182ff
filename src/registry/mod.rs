pub mod checker;
pub mod doi;
pub mod http;

pub use checker::*;
pub use doi::{clean_doi, is_doi_syntax};
pub use http::{create_doi_client, DoiOrgLookup, DEFAULT_TIMEOUT, DOI_RESOLVER_URL};
