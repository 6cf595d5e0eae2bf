use crate::{FetchOutcome, SearchResult};

/// A trait for the presentation layer consuming refresh outcomes.
///
/// Callbacks are delivered from a single delivery task, never
/// concurrently. On success the presenter replaces its entire visible
/// list; failures get one uniform notice, with no per-kind branching.
#[cfg_attr(test, mockall::automock)]
pub trait ResultPresenter: Sync + Send {
    /// Called with the terminal outcome of the latest refresh.
    fn on_outcome(&self, outcome: &FetchOutcome);

    /// Called when the user selects a result for detail display.
    fn on_select(&self, result: &SearchResult);
}
