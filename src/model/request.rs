use std::fmt::Display;

/// The sort direction of a search request.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum SortOrder {
    /// Ascending order.
    Asc,
    /// Descending order.
    Desc,
}

impl SortOrder {
    fn as_str(&self) -> &'static str {
        match self {
            SortOrder::Asc => "asc",
            SortOrder::Desc => "desc",
        }
    }
}

impl Display for SortOrder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A request for one page of repository search results.
///
/// Immutable once built. Page numbers are 1-based; the constructor clamps
/// to 1 and never fails.
#[derive(Debug, PartialEq, Eq, Clone, Hash)]
pub struct FetchRequest {
    /// The text query.
    pub(crate) query_text: String,

    /// The 1-based page number.
    pub(crate) page_number: u32,

    /// The number of results per page.
    pub(crate) page_size: u16,

    /// The field the remote source sorts on.
    pub(crate) sort_key: String,

    /// The sort direction.
    pub(crate) sort_order: SortOrder,
}

impl FetchRequest {
    /// Creates a new `FetchRequest` sorted by stars, descending.
    pub fn new(query_text: &str, page_number: u32, page_size: u16) -> Self {
        Self::with_sort(query_text, page_number, page_size, "stars", SortOrder::Desc)
    }

    /// Creates a new `FetchRequest` with an explicit sort key and order.
    pub fn with_sort(
        query_text: &str,
        page_number: u32,
        page_size: u16,
        sort_key: &str,
        sort_order: SortOrder,
    ) -> Self {
        Self {
            query_text: query_text.to_string(),
            page_number: page_number.max(1),
            page_size,
            sort_key: sort_key.to_string(),
            sort_order,
        }
    }

    /// Retrieves the 1-based page number.
    pub fn page_number(&self) -> u32 {
        self.page_number
    }

    /// Builds the fully qualified search URL for this request.
    ///
    /// Pure and infallible: the output always carries exactly the
    /// parameters `q`, `sort`, `order`, `per_page` and `page`, with the
    /// text values URL-escaped.
    pub fn search_url(&self, base_url: &str) -> String {
        format!(
            "{}/search/repositories?q={}&sort={}&order={}&per_page={}&page={}",
            base_url.trim_end_matches('/'),
            urlencoding::encode(&self.query_text),
            urlencoding::encode(&self.sort_key),
            self.sort_order,
            self.page_size,
            self.page_number
        )
    }

    /// Creates a dummy `FetchRequest` for testing purposes.
    #[cfg(test)]
    pub(crate) fn dummy() -> Self {
        Self::new("dummy", 1, 15)
    }
}

impl Display for FetchRequest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "FetchRequest: query={}, page={}, per_page={}, sort={}/{}",
            self.query_text, self.page_number, self.page_size, self.sort_key, self.sort_order
        )
    }
}
