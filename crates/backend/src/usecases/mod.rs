pub mod u501_product_search;
