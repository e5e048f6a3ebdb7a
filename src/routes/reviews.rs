use axum::{
    Json, Router,
    extract::{Path, Query, State},
    routing::{delete, get},
};

use crate::{
    dto::reviews::{DeletedReview, ReviewList, SubmitReviewRequest},
    error::AppResult,
    middleware::{json::JsonBody, session::Session},
    models::{Review, ReviewCategory},
    response::ApiResponse,
    routes::params::ReviewQuery,
    services::review_service,
    state::AppState,
};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_reviews).post(submit_review))
        .route("/categories", get(list_review_categories))
        .route("/{id}", delete(delete_review))
}

#[utoipa::path(
    get,
    path = "/api/reviews/categories",
    responses(
        (status = 200, description = "Categories a review can be filed under", body = ApiResponse<Vec<ReviewCategory>>)
    ),
    tag = "Reviews"
)]
pub async fn list_review_categories() -> Json<ApiResponse<Vec<ReviewCategory>>> {
    Json(review_service::categories())
}

#[utoipa::path(
    get,
    path = "/api/reviews",
    params(
        ("category" = Option<ReviewCategory>, Query, description = "Defaults to Men's Shoes")
    ),
    responses(
        (status = 200, description = "Reviews of one category in submission order", body = ApiResponse<ReviewList>)
    ),
    tag = "Reviews"
)]
pub async fn list_reviews(
    State(state): State<AppState>,
    session: Session,
    Query(query): Query<ReviewQuery>,
) -> AppResult<Json<ApiResponse<ReviewList>>> {
    let category = query.category.unwrap_or_default();
    Ok(Json(
        review_service::list_reviews(&state, &session, category).await?,
    ))
}

#[utoipa::path(
    post,
    path = "/api/reviews",
    request_body = SubmitReviewRequest,
    responses(
        (status = 200, description = "Review stored", body = ApiResponse<Review>),
        (status = 400, description = "Body is not a review form"),
        (status = 422, description = "Name, review text or rating missing, or rating outside 1-5"),
    ),
    tag = "Reviews"
)]
pub async fn submit_review(
    State(state): State<AppState>,
    session: Session,
    JsonBody(payload): JsonBody<SubmitReviewRequest>,
) -> AppResult<Json<ApiResponse<Review>>> {
    Ok(Json(
        review_service::submit_review(&state, &session, payload).await?,
    ))
}

#[utoipa::path(
    delete,
    path = "/api/reviews/{id}",
    params(
        ("id" = i64, Path, description = "Review ID")
    ),
    responses(
        (status = 200, description = "Review removed if present", body = ApiResponse<DeletedReview>)
    ),
    tag = "Reviews"
)]
pub async fn delete_review(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i64>,
) -> AppResult<Json<ApiResponse<DeletedReview>>> {
    Ok(Json(
        review_service::delete_review(&state, &session, id).await?,
    ))
}
