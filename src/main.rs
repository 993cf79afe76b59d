use anyhow::Context;
use axum::{routing::get, Router};
use sqlx::SqlitePool;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;

mod config;
mod db;
mod error;
mod handlers;
mod models;

use crate::config::Config;
use crate::db::ItemRepository;

/// Handed to every handler; cloning copies the repository's pool handle.
#[derive(Clone)]
pub struct AppState {
    pub items: ItemRepository,
}

impl AppState {
    pub fn new(pool: SqlitePool) -> Self {
        Self {
            items: ItemRepository::new(pool),
        }
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env if present (ignored in production where env vars are injected)
    dotenv::dotenv().ok();

    // Structured logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .or_else(|_| tracing_subscriber::EnvFilter::try_new("info,stockery=debug"))?,
        )
        .with_target(false)
        .compact()
        .init();

    let config = Config::from_env()?;

    info!("Opening store at {}...", config.database_url);
    let pool = db::connect(&config.database_url)
        .await
        .with_context(|| format!("failed to open store {}", config.database_url))?;

    db::ensure_schema(&pool)
        .await
        .context("failed to create the stationeries table")?;

    let app = build_router(AppState::new(pool));

    let addr = format!("{}:{}", config.host, config.port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("failed to bind {}", addr))?;
    info!("Server started: http://{}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}

fn build_router(state: AppState) -> Router {
    Router::new()
        // ── Health ──────────────────────────────────────────────────────────
        .route("/", get(handlers::health))

        // ── Items ───────────────────────────────────────────────────────────
        .route(
            "/items",
            get(handlers::items::list_items).post(handlers::items::create_item),
        )

        // ── Middleware ──────────────────────────────────────────────────────
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
