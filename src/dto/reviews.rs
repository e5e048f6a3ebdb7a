use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::models::{Review, ReviewCategory};

/// Review form contents. Missing fields fall back to their blank value so
/// that the form validation, not the JSON decoder, reports them.
#[derive(Debug, Default, Deserialize, ToSchema)]
#[serde(default)]
pub struct SubmitReviewRequest {
    pub category: ReviewCategory,
    pub name: String,
    pub review: String,
    pub rating: i64,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct ReviewList {
    pub category: ReviewCategory,
    pub items: Vec<Review>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct DeletedReview {
    pub id: i64,
    pub removed: bool,
}
