use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::models::{CartLine, Category};

#[derive(Debug, Deserialize, ToSchema)]
pub struct AddToCartRequest {
    pub product_id: u32,
}

/// Quantity exactly as typed into the cart's number box. Any JSON value is
/// accepted; whatever does not read as a number later becomes 1.
#[derive(Debug, Clone, Deserialize, ToSchema)]
#[serde(untagged)]
pub enum QuantityInput {
    Number(i64),
    Text(String),
    Other(serde_json::Value),
}

impl Default for QuantityInput {
    fn default() -> Self {
        QuantityInput::Other(serde_json::Value::Null)
    }
}

impl QuantityInput {
    pub fn raw(&self) -> String {
        match self {
            QuantityInput::Number(n) => n.to_string(),
            QuantityInput::Text(text) => text.clone(),
            // `2.5` reads as 2, like the number box does.
            QuantityInput::Other(serde_json::Value::Number(n)) => n.to_string(),
            QuantityInput::Other(_) => String::new(),
        }
    }
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct SetQuantityRequest {
    #[serde(default)]
    pub quantity: QuantityInput,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct CartView {
    pub category: Category,
    pub lines: Vec<CartLine>,
    pub items: u64,
    pub total: String,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct CartSummary {
    pub category: Category,
    pub title: String,
    pub lines: usize,
    pub items: u64,
    pub total: String,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct CartOverview {
    pub carts: Vec<CartSummary>,
    /// Shown on the navigation bar's cart badge.
    pub items: u64,
}
