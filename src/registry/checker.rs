use log::{debug, warn};
use std::fmt;
use std::future::Future;
use thiserror::Error;

use super::doi::{clean_doi, is_doi_syntax};
use super::http::{DoiOrgLookup, DEFAULT_TIMEOUT};

/// Why a registration lookup could not give an answer
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LookupError {
    #[error("malformed DOI {0:?}")]
    MalformedDoi(String),
    #[error("registry request failed: {0}")]
    Transport(String),
    #[error("registry answered with unexpected status {0}")]
    UnexpectedStatus(u16),
    #[error("invalid resolver URL {0:?}")]
    InvalidResolverUrl(String),
}

/// Outcome of asking the registry about a DOI
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RegistrationStatus {
    Registered,
    NotRegistered,
    LookupFailed(LookupError),
}

impl RegistrationStatus {
    /// Map a resolver HTTP status code to a registration status.
    /// Redirects count as registered: the resolver forwards to the landing page.
    pub fn from_http_status(code: u16) -> Self {
        match code {
            200..=399 => RegistrationStatus::Registered,
            404 => RegistrationStatus::NotRegistered,
            other => RegistrationStatus::LookupFailed(LookupError::UnexpectedStatus(other)),
        }
    }

    pub fn is_registered(&self) -> bool {
        matches!(self, RegistrationStatus::Registered)
    }

    pub fn label(&self) -> &'static str {
        match self {
            RegistrationStatus::Registered => "registered",
            RegistrationStatus::NotRegistered => "not_registered",
            RegistrationStatus::LookupFailed(_) => "lookup_failed",
        }
    }

    pub fn error(&self) -> Option<&LookupError> {
        match self {
            RegistrationStatus::LookupFailed(e) => Some(e),
            _ => None,
        }
    }
}

impl fmt::Display for RegistrationStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RegistrationStatus::LookupFailed(e) => write!(f, "lookup failed ({})", e),
            other => f.write_str(other.label()),
        }
    }
}

/// Source of registration answers. `DoiOrgLookup` asks the public resolver;
/// tests substitute their own registry.
pub trait RegistryLookup {
    /// HTTP status the registry reports for a syntactically valid DOI
    fn lookup_status(&self, doi: &str) -> impl Future<Output = Result<u16, LookupError>> + Send;
}

/// Checks DOIs against a registry
#[derive(Debug, Clone)]
pub struct RegistryChecker<L> {
    lookup: L,
}

impl<L: RegistryLookup> RegistryChecker<L> {
    pub fn new(lookup: L) -> Self {
        Self { lookup }
    }

    pub fn lookup(&self) -> &L {
        &self.lookup
    }

    /// Registration status of `doi`. Malformed DOIs are rejected without a request.
    pub async fn status(&self, doi: &str) -> RegistrationStatus {
        let cleaned = clean_doi(doi);
        if !is_doi_syntax(&cleaned) {
            debug!("Not looking up malformed DOI {:?}", doi);
            return RegistrationStatus::LookupFailed(LookupError::MalformedDoi(doi.to_string()));
        }

        let status = match self.lookup.lookup_status(&cleaned).await {
            Ok(code) => RegistrationStatus::from_http_status(code),
            Err(e) => RegistrationStatus::LookupFailed(e),
        };
        debug!("DOI {} is {}", cleaned, status);
        status
    }

    /// True only when the registry confirms the DOI; failures count as false
    pub async fn is_registered(&self, doi: &str) -> bool {
        self.status(doi).await.is_registered()
    }
}

impl RegistryChecker<DoiOrgLookup> {
    /// Checker against https://doi.org with the default timeout
    pub fn doi_org() -> reqwest::Result<Self> {
        Ok(Self::new(DoiOrgLookup::new(DEFAULT_TIMEOUT)?))
    }
}

/// Check whether `doi` is registered at https://doi.org.
/// Any failure, including a malformed DOI, yields false.
pub async fn is_registered_doi(doi: &str) -> bool {
    match RegistryChecker::doi_org() {
        Ok(checker) => checker.is_registered(doi).await,
        Err(e) => {
            warn!("Could not create HTTP client for DOI lookup: {}", e);
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use std::sync::atomic::{AtomicUsize, Ordering};

    /// In-memory registry answering from a fixed table
    #[derive(Default)]
    struct FakeRegistry {
        answers: HashMap<String, Result<u16, LookupError>>,
        requests: AtomicUsize,
    }

    impl FakeRegistry {
        fn with(mut self, doi: &str, answer: Result<u16, LookupError>) -> Self {
            self.answers.insert(doi.to_string(), answer);
            self
        }
    }

    impl RegistryLookup for FakeRegistry {
        async fn lookup_status(&self, doi: &str) -> Result<u16, LookupError> {
            self.requests.fetch_add(1, Ordering::SeqCst);
            self.answers.get(doi).cloned().unwrap_or(Ok(404))
        }
    }

    fn checker() -> RegistryChecker<FakeRegistry> {
        RegistryChecker::new(
            FakeRegistry::default()
                .with("10.12751/g-node.5b08du", Ok(302))
                .with("10.1234/gone", Ok(410))
                .with(
                    "10.1234/offline",
                    Err(LookupError::Transport("connection refused".to_string())),
                ),
        )
    }

    #[test]
    fn test_from_http_status() {
        assert_eq!(RegistrationStatus::from_http_status(200), RegistrationStatus::Registered);
        assert_eq!(RegistrationStatus::from_http_status(302), RegistrationStatus::Registered);
        assert_eq!(RegistrationStatus::from_http_status(404), RegistrationStatus::NotRegistered);
        assert_eq!(
            RegistrationStatus::from_http_status(500),
            RegistrationStatus::LookupFailed(LookupError::UnexpectedStatus(500))
        );
    }

    #[tokio::test]
    async fn test_registered_doi() {
        let checker = checker();
        assert!(checker.is_registered("10.12751/g-node.5b08du").await);
        assert!(checker.is_registered("https://doi.org/10.12751/g-node.5b08du").await);
    }

    #[tokio::test]
    async fn test_malformed_doi_skips_lookup() {
        let checker = checker();
        let status = checker.status("idonotexist").await;
        assert_eq!(
            status,
            RegistrationStatus::LookupFailed(LookupError::MalformedDoi("idonotexist".to_string()))
        );
        assert!(!status.is_registered());
        assert_eq!(checker.lookup().requests.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_unregistered_doi() {
        let checker = checker();
        assert_eq!(checker.status("10.1234/unknown").await, RegistrationStatus::NotRegistered);
        assert!(!checker.is_registered("10.1234/unknown").await);
    }

    #[tokio::test]
    async fn test_failures_are_not_registered() {
        let checker = checker();

        let gone = checker.status("10.1234/gone").await;
        assert_eq!(gone.error(), Some(&LookupError::UnexpectedStatus(410)));
        assert!(!gone.is_registered());

        let offline = checker.status("10.1234/offline").await;
        assert_eq!(offline.label(), "lookup_failed");
        assert!(!offline.is_registered());
    }

    #[tokio::test]
    async fn test_free_function_rejects_malformed_doi() {
        assert!(!is_registered_doi("idonotexist").await);
    }

    #[tokio::test]
    #[ignore = "requires network access to doi.org"]
    async fn test_live_registered_doi() {
        assert!(is_registered_doi("10.12751/g-node.5b08du").await);
    }
}
