use serde::Serialize;
use utoipa::ToSchema;

use crate::models::{Category, Product, ProductTag};

#[derive(Debug, Serialize, ToSchema)]
pub struct CategoryInfo {
    pub category: Category,
    pub title: String,
    pub path: String,
    pub filter_tags: Vec<ProductTag>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct ProductList {
    pub category: Category,
    pub items: Vec<Product>,
}
