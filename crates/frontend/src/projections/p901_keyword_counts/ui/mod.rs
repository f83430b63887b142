pub mod popular_keywords;
