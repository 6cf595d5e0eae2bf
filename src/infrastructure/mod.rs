mod coordinator;
mod debouncer;
mod fetcher_http;
mod parser;
mod session;

pub use coordinator::*;
pub use debouncer::*;
pub use fetcher_http::*;
pub use parser::*;
pub use session::*;
