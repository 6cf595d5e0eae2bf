use thiserror::Error;

/// The standard result type used throughout the application.
pub type StdResult<T> = Result<T, anyhow::Error>;

/// Search error
#[derive(Error, Debug)]
pub enum SearchError {
    /// Transport or connectivity failure
    #[error("Network error: {0}")]
    Network(String),
    /// Malformed response body
    #[error("Parsing error: {0}")]
    Parse(String),
}
