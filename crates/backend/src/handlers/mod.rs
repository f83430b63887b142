pub mod catalog;
pub mod keywords;
pub mod sessions;
