pub mod cart;
pub mod catalog;
pub mod reviews;
pub mod search;
