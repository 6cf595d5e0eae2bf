use std::fmt::Display;

use serde::Serialize;

/// A single repository search result.
///
/// Every field is optional because the upstream payload may omit any of
/// them; absence is preserved as `None` rather than defaulted to an empty
/// string (display fallbacks belong to the presenter).
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct SearchResult {
    /// The fully qualified name of the repository (e.g. `owner/name`).
    name: Option<String>,

    /// The free-text description of the repository.
    description: Option<String>,

    /// The canonical web URL of the repository page.
    url: Option<String>,
}

impl SearchResult {
    /// Creates a new `SearchResult` instance.
    pub fn new(name: Option<String>, description: Option<String>, url: Option<String>) -> Self {
        Self {
            name,
            description,
            url,
        }
    }

    /// Retrieves the fully qualified name.
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// Retrieves the description.
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    /// Retrieves the web URL.
    pub fn url(&self) -> Option<&str> {
        self.url.as_deref()
    }

    /// Creates a named `SearchResult` for testing purposes.
    #[cfg(test)]
    pub(crate) fn dummy(name: &str) -> Self {
        Self {
            name: Some(name.to_string()),
            description: None,
            url: None,
        }
    }
}

impl Display for SearchResult {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Result: {}, Url: {}",
            self.name.as_deref().unwrap_or("<unnamed>"),
            self.url.as_deref().unwrap_or("<no url>")
        )
    }
}
