use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::catalog::SearchItem;

#[derive(Debug, Deserialize, ToSchema)]
pub struct SearchRequest {
    #[serde(default)]
    pub query: String,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct SearchResults {
    pub items: Vec<SearchItem>,
}
