pub mod cache;
pub mod catalog;
pub mod error;
pub mod filter;
pub mod loader;
pub mod normalize;
pub mod sheet;

pub use catalog::Catalog;
pub use error::DataLoadError;
