use anyhow::Context;
use log::debug;
use reqwest::Client;

use crate::{FetchRequest, PageFetcher, SearchError, SearchResult, StdResult, parse_search_payload};

/// The REST production endpoint for GitHub.
pub const GITHUB_API_ENDPOINT: &str = "https://api.github.com";

/// The user agent sent with every request (required by the GitHub API).
const USER_AGENT: &str = concat!("github-search/", env!("CARGO_PKG_VERSION"));

/// Fetches search result pages over HTTP.
pub struct HttpPageFetcher {
    client: Client,
    base_url: String,
}

impl HttpPageFetcher {
    /// Creates a new `HttpPageFetcher` targeting the given base URL.
    pub fn try_new(base_url: &str) -> StdResult<Self> {
        let client = Client::builder()
            .user_agent(USER_AGENT)
            .build()
            .with_context(|| "Failed to build HTTP client")?;

        Ok(Self {
            client,
            base_url: base_url.to_string(),
        })
    }
}

#[async_trait::async_trait]
impl PageFetcher for HttpPageFetcher {
    async fn fetch_page(&self, request: &FetchRequest) -> StdResult<Vec<SearchResult>> {
        let url = request.search_url(&self.base_url);
        debug!("Fetching {url}");
        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| SearchError::Network(e.to_string()))?
            .error_for_status()
            .map_err(|e| SearchError::Network(e.to_string()))?;
        let body = response
            .text()
            .await
            .map_err(|e| SearchError::Network(e.to_string()))?;

        Ok(parse_search_payload(&body)?)
    }
}
