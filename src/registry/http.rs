use log::debug;
use reqwest::{Client, Url};
use std::time::Duration;

use super::checker::{LookupError, RegistryLookup};

/// Public DOI resolver; a registered DOI redirects to its landing page
pub const DOI_RESOLVER_URL: &str = "https://doi.org";

/// Per-request timeout for registry lookups
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// Create an HTTP client configured for DOI resolution
pub fn create_doi_client() -> reqwest::Result<Client> {
    Client::builder()
        .redirect(reqwest::redirect::Policy::none())
        .build()
}

/// Registry lookup against a DOI resolver via HTTP HEAD requests
#[derive(Debug, Clone)]
pub struct DoiOrgLookup {
    client: Client,
    base_url: String,
    timeout: Duration,
}

impl DoiOrgLookup {
    pub fn new(timeout: Duration) -> reqwest::Result<Self> {
        Ok(Self::with_client(create_doi_client()?, timeout))
    }

    /// Use a caller-configured client. It should not follow redirects.
    pub fn with_client(client: Client, timeout: Duration) -> Self {
        Self {
            client,
            base_url: DOI_RESOLVER_URL.to_string(),
            timeout,
        }
    }

    /// Point lookups at another resolver, e.g. a mirror or a test server
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_string();
        self
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Resolver URL for `doi`. Each DOI segment is percent-encoded, so `#`,
    /// `?` and `%` in a suffix stay part of the path.
    pub fn url_for(&self, doi: &str) -> Result<Url, LookupError> {
        let mut url = Url::parse(&self.base_url)
            .map_err(|_| LookupError::InvalidResolverUrl(self.base_url.clone()))?;
        url.path_segments_mut()
            .map_err(|_| LookupError::InvalidResolverUrl(self.base_url.clone()))?
            .pop_if_empty()
            .extend(doi.split('/'));
        Ok(url)
    }
}

impl RegistryLookup for DoiOrgLookup {
    async fn lookup_status(&self, doi: &str) -> Result<u16, LookupError> {
        let url = self.url_for(doi)?;

        match self.client.head(url.as_str()).timeout(self.timeout).send().await {
            Ok(resp) => Ok(resp.status().as_u16()),
            Err(e) => {
                debug!("DOI lookup failed for {} at {}: {}", doi, url, e);
                Err(LookupError::Transport(e.to_string()))
            }
        }
    }
}
