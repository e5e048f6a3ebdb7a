use std::{net::SocketAddr, sync::Arc};

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use stirling_storefront::{
    app::build_router,
    config::AppConfig,
    db::{create_orm_conn, run_migrations},
    state::AppState,
    storage::{DatabaseStore, KeyValueStore, MemoryStore, Storage},
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,stirling_storefront=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = AppConfig::from_env()?;

    let backend: Arc<dyn KeyValueStore> = match &config.database_url {
        Some(url) => {
            let orm = create_orm_conn(url).await?;
            run_migrations(&orm).await?;
            tracing::info!("storing shopper state in the database");
            Arc::new(DatabaseStore::new(orm))
        }
        None => {
            tracing::warn!("DATABASE_URL not set, shopper state is kept in memory");
            Arc::new(MemoryStore::default())
        }
    };
    let state = AppState::new(Storage::new(backend, config.storage_prefix.clone()));

    let app = build_router(state);

    let addr = SocketAddr::from((config.host.parse::<std::net::IpAddr>()?, config.port));
    tracing::info!("listening on {}", addr);

    axum::serve(tokio::net::TcpListener::bind(addr).await?, app).await?;

    Ok(())
}
