use chrono::Utc;
use stirling_storefront::{
    dto::reviews::SubmitReviewRequest,
    error::AppError,
    middleware::session::Session,
    models::{Review, ReviewCategory},
    response::NoticeLevel,
    services::review_service,
    state::AppState,
    storage::{KeyValueStore, Slot},
};

fn request(category: ReviewCategory, name: &str, review: &str, rating: i64) -> SubmitReviewRequest {
    SubmitReviewRequest {
        category,
        name: name.to_string(),
        review: review.to_string(),
        rating,
    }
}

async fn all_reviews(state: &AppState, session: &Session) -> Vec<Review> {
    let key = state.storage.key(session, Slot::Reviews);
    match state.storage.backend().get(&key).await.expect("storage read") {
        Some(raw) => serde_json::from_str(&raw).expect("stored reviews"),
        None => Vec::new(),
    }
}

#[tokio::test]
async fn incomplete_reviews_are_rejected_without_changes() -> anyhow::Result<()> {
    let state = AppState::in_memory();
    let session = Session::anonymous();
    review_service::submit_review(
        &state,
        &session,
        request(ReviewCategory::Sneakers, "Ana", "Light and quick", 5),
    )
    .await?;
    let before = all_reviews(&state, &session).await;

    for bad in [
        request(ReviewCategory::Sneakers, "", "Nice", 4),
        request(ReviewCategory::Sneakers, "Ben", "", 4),
        request(ReviewCategory::Sneakers, "Ben", "Nice", 0),
        SubmitReviewRequest::default(),
    ] {
        let err = review_service::submit_review(&state, &session, bad)
            .await
            .expect_err("validation");
        assert!(matches!(err, AppError::Validation(ref msg) if msg == "Please fill out all fields!"));
        assert_eq!(err.level(), NoticeLevel::Warning);
    }

    assert_eq!(all_reviews(&state, &session).await, before);
    Ok(())
}

#[tokio::test]
async fn complete_review_is_appended_with_todays_date() -> anyhow::Result<()> {
    let state = AppState::in_memory();
    let session = Session::anonymous();

    let resp = review_service::submit_review(
        &state,
        &session,
        request(ReviewCategory::KidsShoes, "Maya", "My son wears them daily", 4),
    )
    .await?;
    assert_eq!(resp.message, "Review submitted successfully!");
    let review = resp.data.expect("review");
    assert_eq!(review.category, ReviewCategory::KidsShoes);
    assert_eq!(review.date, Utc::now().date_naive());
    assert_eq!(review.rating, 4);

    let stored = all_reviews(&state, &session).await;
    assert_eq!(stored, vec![review]);
    Ok(())
}

#[tokio::test]
async fn listing_filters_by_category_in_submission_order() -> anyhow::Result<()> {
    let state = AppState::in_memory();
    let session = Session::anonymous();
    for (category, name) in [
        (ReviewCategory::MensShoes, "first"),
        (ReviewCategory::Sneakers, "other"),
        (ReviewCategory::MensShoes, "second"),
        (ReviewCategory::MensShoes, "third"),
    ] {
        review_service::submit_review(&state, &session, request(category, name, "text", 3)).await?;
    }

    let list = review_service::list_reviews(&state, &session, ReviewCategory::MensShoes)
        .await?
        .data
        .expect("reviews");
    let names: Vec<&str> = list.items.iter().map(|r| r.name.as_str()).collect();
    assert_eq!(names, ["first", "second", "third"]);

    let ids: Vec<i64> = list.items.iter().map(|r| r.id).collect();
    assert!(ids.windows(2).all(|w| w[0] < w[1]));

    let empty = review_service::list_reviews(&state, &session, ReviewCategory::WomensShoes)
        .await?
        .data
        .expect("reviews");
    assert!(empty.items.is_empty());
    Ok(())
}

#[tokio::test]
async fn delete_removes_only_the_matching_review() -> anyhow::Result<()> {
    let state = AppState::in_memory();
    let session = Session::anonymous();
    let keep = review_service::submit_review(
        &state,
        &session,
        request(ReviewCategory::WomensShoes, "Keep", "stays", 5),
    )
    .await?
    .data
    .expect("review");
    let drop = review_service::submit_review(
        &state,
        &session,
        request(ReviewCategory::WomensShoes, "Drop", "goes", 2),
    )
    .await?
    .data
    .expect("review");

    let resp = review_service::delete_review(&state, &session, drop.id).await?;
    assert_eq!(resp.level, NoticeLevel::Info);
    assert!(resp.data.expect("deleted").removed);
    assert_eq!(all_reviews(&state, &session).await, vec![keep.clone()]);

    let again = review_service::delete_review(&state, &session, drop.id).await?;
    assert!(!again.data.expect("deleted").removed);
    assert_eq!(all_reviews(&state, &session).await, vec![keep]);
    Ok(())
}

#[tokio::test]
async fn review_categories_are_listed_in_filter_order() {
    let resp = review_service::categories();
    assert_eq!(
        resp.data.expect("categories"),
        ReviewCategory::ALL.to_vec()
    );
}
