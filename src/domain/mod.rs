//! Storefront rules with no I/O: carts, reviews and quick search.

pub mod cart;
pub mod reviews;
pub mod search;
