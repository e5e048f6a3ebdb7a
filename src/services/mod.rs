pub mod cart_service;
pub mod catalog_service;
pub mod review_service;
pub mod search_service;
