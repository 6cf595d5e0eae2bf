mod fetcher;
mod presenter;

pub use fetcher::*;
pub use presenter::*;
