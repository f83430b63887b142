pub mod p901_keyword_counts;
