mod chunk;
pub mod edit;
pub mod error;
pub mod locator;
pub mod options;

pub use edit::SpliceString;
pub use error::{EditError, Result};
pub use locator::{Location, Locator};
pub use options::Options;
