mod entities;
mod error;
mod outcome;
mod request;

pub use entities::*;
pub use error::*;
pub use outcome::*;
pub use request::*;
