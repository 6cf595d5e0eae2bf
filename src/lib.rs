//! The search core of a repository-search client: a debounced, paginated,
//! all-or-nothing fetch pipeline that keeps a visible result list
//! consistent under concurrent refresh and search-edit events.
//!
//! The [FetchCoordinator] merges a fixed number of result pages into one
//! terminal [FetchOutcome] per refresh; the [SearchDebouncer] collapses
//! input bursts into single triggers; the [SearchSession] tags refreshes
//! with generations, discards stale outcomes and owns the only place the
//! visible list is mutated. Rendering is behind the [ResultPresenter]
//! seam and stays out of this crate.

mod infrastructure;
mod interface;
mod model;

pub use infrastructure::*;
pub use interface::*;
pub use model::*;
