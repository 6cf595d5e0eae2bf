use crate::{FetchRequest, SearchResult, StdResult};

/// A trait for fetching one page of search results from the remote source.
#[cfg_attr(test, mockall::automock)]
#[async_trait::async_trait]
pub trait PageFetcher: Sync + Send {
    /// Fetches the page of results described by the request, preserving
    /// the order returned by the remote source.
    async fn fetch_page(&self, request: &FetchRequest) -> StdResult<Vec<SearchResult>>;
}
