use chrono::Utc;

use crate::{
    domain::reviews::{ReviewBook, ReviewDraft},
    dto::reviews::{DeletedReview, ReviewList, SubmitReviewRequest},
    error::{AppError, AppResult},
    middleware::session::Session,
    models::{Review, ReviewCategory},
    response::{ApiResponse, Meta},
    state::AppState,
    storage::Slot,
};

async fn load_book(state: &AppState, key: &str) -> AppResult<ReviewBook> {
    let reviews: Vec<Review> = state.storage.load_json(key).await?;
    Ok(ReviewBook::from_reviews(reviews))
}

pub fn categories() -> ApiResponse<Vec<ReviewCategory>> {
    let categories = ReviewCategory::ALL.to_vec();
    let meta = Meta::total(categories.len());
    ApiResponse::success("Review categories", categories, Some(meta))
}

pub async fn list_reviews(
    state: &AppState,
    session: &Session,
    category: ReviewCategory,
) -> AppResult<ApiResponse<ReviewList>> {
    let key = state.storage.key(session, Slot::Reviews);
    let book = load_book(state, &key).await?;
    let items = book.by_category(category);
    let meta = Meta::total(items.len());
    Ok(ApiResponse::success(
        "Reviews",
        ReviewList { category, items },
        Some(meta),
    ))
}

pub async fn submit_review(
    state: &AppState,
    session: &Session,
    payload: SubmitReviewRequest,
) -> AppResult<ApiResponse<Review>> {
    let draft = ReviewDraft {
        category: payload.category,
        name: payload.name,
        review: payload.review,
        rating: payload.rating,
    };

    let _guard = state.write_guard().await;
    let key = state.storage.key(session, Slot::Reviews);
    let mut book = load_book(state, &key).await?;
    let review = book
        .submit(draft, Utc::now())
        .map_err(|rejection| AppError::Validation(rejection.to_string()))?
        .clone();
    state.storage.save_json(&key, book.reviews()).await?;

    tracing::info!(
        session = session.as_str(),
        review_id = review.id,
        category = review.category.label(),
        rating = review.rating,
        "review submitted"
    );
    Ok(ApiResponse::success(
        "Review submitted successfully!",
        review,
        Some(Meta::total(book.len())),
    ))
}

pub async fn delete_review(
    state: &AppState,
    session: &Session,
    id: i64,
) -> AppResult<ApiResponse<DeletedReview>> {
    let _guard = state.write_guard().await;
    let key = state.storage.key(session, Slot::Reviews);
    let mut book = load_book(state, &key).await?;
    let removed = book.delete(id);
    state.storage.save_json(&key, book.reviews()).await?;

    tracing::debug!(session = session.as_str(), review_id = id, removed, "review deleted");
    Ok(ApiResponse::info(
        "Review deleted!",
        DeletedReview { id, removed },
        Some(Meta::total(book.len())),
    ))
}
