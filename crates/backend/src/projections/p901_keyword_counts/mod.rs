pub mod counts;
pub mod error;
pub mod repository;
pub mod service;

pub use counts::KeywordCounts;
pub use error::{CountsStoreError, PersistError};
pub use service::KeywordStore;
