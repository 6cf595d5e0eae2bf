use std::sync::Arc;

use log::{debug, info, warn};

use crate::{FetchOutcome, FetchRequest, PageFetcher, SearchResult, StdResult};

/// The search term used when the query text is empty and no filter is
/// active.
pub const DEFAULT_QUERY_TERM: &str = "apple";

/// Orchestrates one logical refresh over a fixed number of pages.
///
/// Pages are fetched concurrently and joined in page order; the merged
/// sequence keeps page 1 results before page 2 results and intra-page
/// remote order. Any page failure fails the whole refresh; a partial
/// merge is never reported as success. Overlapping invocations run to
/// completion independently; discarding stale outcomes is the job of the
/// [SearchSession](crate::SearchSession) generation guard, not of this
/// component.
pub struct FetchCoordinator {
    fetcher: Arc<dyn PageFetcher>,
    page_count: u32,
    page_size: u16,
    default_query: String,
}

impl FetchCoordinator {
    /// Creates a new `FetchCoordinator` fetching the given number of pages
    /// per refresh.
    pub fn new(
        fetcher: Arc<dyn PageFetcher>,
        page_count: u32,
        page_size: u16,
        default_query: &str,
    ) -> Self {
        Self {
            fetcher,
            page_count: page_count.max(1),
            page_size,
            default_query: default_query.to_string(),
        }
    }

    /// Runs one refresh for the given query and produces exactly one
    /// terminal outcome.
    ///
    /// An empty query falls back to the configured default term.
    pub async fn refresh(&self, query: &str) -> FetchOutcome {
        let effective_query = if query.trim().is_empty() {
            &self.default_query
        } else {
            query
        };
        info!(
            "Refreshing {} page(s) for query: {effective_query}",
            self.page_count
        );

        let mut handles = Vec::new();
        for page_number in 1..=self.page_count {
            let request = FetchRequest::new(effective_query, page_number, self.page_size);
            let fetcher = Arc::clone(&self.fetcher);
            handles.push(tokio::spawn(async move {
                fetcher.fetch_page(&request).await
            }));
        }

        // Join every page before reporting anything: neither an early
        // failure nor a first-page success may escape while sibling pages
        // are outstanding.
        let mut merged: Vec<SearchResult> = Vec::new();
        let mut failure: Option<String> = None;
        for (index, handle) in handles.into_iter().enumerate() {
            let page_result: StdResult<Vec<SearchResult>> = match handle.await {
                Ok(result) => result,
                Err(e) => Err(e.into()),
            };
            match page_result {
                Ok(results) => {
                    debug!("Page {} returned {} result(s)", index + 1, results.len());
                    merged.extend(results);
                }
                Err(e) => {
                    warn!("Page {} failed: {e}", index + 1);
                    failure.get_or_insert(e.to_string());
                }
            }
        }

        match failure {
            Some(reason) => FetchOutcome::Failure(reason),
            None => FetchOutcome::Success(merged),
        }
    }
}

#[cfg(test)]
mod tests {
    use anyhow::anyhow;
    use mockall::predicate::function;

    use crate::{MockPageFetcher, SearchResult};

    use super::*;

    fn page_predicate(page_number: u32) -> impl Fn(&FetchRequest) -> bool {
        move |request: &FetchRequest| request.page_number() == page_number
    }

    #[tokio::test]
    async fn refresh_merges_pages_in_page_order() {
        let fetcher = {
            let mut fetcher = MockPageFetcher::new();
            fetcher
                .expect_fetch_page()
                .with(function(page_predicate(1)))
                .returning(|_| {
                    Ok((0..15)
                        .map(|i| SearchResult::dummy(&format!("page1/repo-{i}")))
                        .collect())
                })
                .times(1);
            fetcher
                .expect_fetch_page()
                .with(function(page_predicate(2)))
                .returning(|_| {
                    Ok((0..10)
                        .map(|i| SearchResult::dummy(&format!("page2/repo-{i}")))
                        .collect())
                })
                .times(1);

            fetcher
        };
        let coordinator = FetchCoordinator::new(Arc::new(fetcher), 2, 15, "apple");

        let outcome = coordinator.refresh("rust").await;

        let results = outcome.results().expect("Refresh should succeed");
        assert_eq!(25, results.len());
        assert_eq!(Some("page1/repo-0"), results[0].name());
        assert_eq!(Some("page1/repo-14"), results[14].name());
        assert_eq!(Some("page2/repo-0"), results[15].name());
        assert_eq!(Some("page2/repo-9"), results[24].name());
    }

    #[tokio::test]
    async fn refresh_fails_whole_cycle_if_one_page_fails() {
        let fetcher = {
            let mut fetcher = MockPageFetcher::new();
            fetcher
                .expect_fetch_page()
                .with(function(page_predicate(1)))
                .returning(|_| Ok(vec![SearchResult::dummy("page1/repo-0")]))
                .times(1);
            fetcher
                .expect_fetch_page()
                .with(function(page_predicate(2)))
                .returning(|_| Err(anyhow!("Error fetching data")))
                .times(1);

            fetcher
        };
        let coordinator = FetchCoordinator::new(Arc::new(fetcher), 2, 15, "apple");

        let outcome = coordinator.refresh("rust").await;

        assert!(
            matches!(outcome, FetchOutcome::Failure(_)),
            "Refresh should fail as a whole, got: {outcome:?}"
        );
    }

    #[tokio::test]
    async fn refresh_substitutes_default_query_when_empty() {
        let fetcher = {
            let mut fetcher = MockPageFetcher::new();
            fetcher
                .expect_fetch_page()
                .with(function(|request: &FetchRequest| {
                    request.query_text == "apple"
                }))
                .returning(|_| Ok(vec![]))
                .times(2);

            fetcher
        };
        let coordinator = FetchCoordinator::new(Arc::new(fetcher), 2, 15, "apple");

        let outcome = coordinator.refresh("  ").await;

        assert!(outcome.is_success());
    }

    #[tokio::test]
    async fn refresh_with_single_page() {
        let fetcher = {
            let mut fetcher = MockPageFetcher::new();
            fetcher
                .expect_fetch_page()
                .returning(|_| Ok(vec![SearchResult::dummy("org/repo")]))
                .times(1);

            fetcher
        };
        let coordinator = FetchCoordinator::new(Arc::new(fetcher), 1, 15, "apple");

        let outcome = coordinator.refresh("rust").await;

        assert_eq!(1, outcome.results().unwrap().len());
    }
}
