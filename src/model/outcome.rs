use super::SearchResult;

/// The terminal outcome of one refresh invocation.
///
/// Exactly one `FetchOutcome` is produced per refresh, regardless of how
/// many pages it issues internally.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FetchOutcome {
    /// All pages succeeded; results are merged in page order.
    Success(Vec<SearchResult>),

    /// At least one page failed; the reason is opaque to consumers.
    Failure(String),
}

impl FetchOutcome {
    /// Retrieves the merged results of a successful refresh.
    pub fn results(&self) -> Option<&[SearchResult]> {
        match self {
            FetchOutcome::Success(results) => Some(results),
            FetchOutcome::Failure(_) => None,
        }
    }

    /// Whether this outcome is a success.
    pub fn is_success(&self) -> bool {
        matches!(self, FetchOutcome::Success(_))
    }
}
