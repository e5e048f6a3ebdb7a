use std::sync::Arc;

use stirling_storefront::{
    config::AppConfig,
    db::{create_orm_conn, run_migrations},
    dto::reviews::SubmitReviewRequest,
    middleware::session::Session,
    models::ReviewCategory,
    services::review_service,
    state::AppState,
    storage::{DatabaseStore, Storage},
};

/// Seeds the landing-page testimonials as reviews of one session
/// (`SEED_SESSION`, default `anonymous`).
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let config = AppConfig::from_env()?;
    let database_url = config
        .database_url
        .ok_or_else(|| anyhow::anyhow!("DATABASE_URL must be set to seed reviews"))?;

    let orm = create_orm_conn(&database_url).await?;
    // Ensure migrations are applied.
    run_migrations(&orm).await?;

    let storage = Storage::new(Arc::new(DatabaseStore::new(orm)), config.storage_prefix);
    let state = AppState::new(storage);
    let session = match std::env::var("SEED_SESSION") {
        Ok(id) => Session::new(id)?,
        Err(_) => Session::anonymous(),
    };

    let testimonials = [
        (
            ReviewCategory::Sneakers,
            "Jordan Michaels",
            "The Nike Air Jordans are the best sneakers I've ever owned! Super comfortable and stylish.",
            5,
        ),
        (
            ReviewCategory::WomensShoes,
            "Emily Johnson",
            "I love the Nike Pegasus! Great support for running, and the design is sleek.",
            5,
        ),
        (
            ReviewCategory::MensShoes,
            "Chris Anderson",
            "Affordable and durable. My Nike Air Max 270s have lasted me over a year with daily use.",
            4,
        ),
        (
            ReviewCategory::Sneakers,
            "Sophia Carter",
            "The Nike Dunks are amazing! They fit perfectly and go well with any outfit.",
            5,
        ),
        (
            ReviewCategory::MensShoes,
            "Daniel Evans",
            "Fast shipping and great quality! The Nike Metcons are perfect for my workouts.",
            4,
        ),
    ];

    for (category, name, review, rating) in testimonials {
        review_service::submit_review(
            &state,
            &session,
            SubmitReviewRequest {
                category,
                name: name.to_string(),
                review: review.to_string(),
                rating,
            },
        )
        .await?;
        println!("Seeded review by {name} ({})", category.label());
    }

    println!("Seed completed for session {}", session.as_str());
    Ok(())
}
