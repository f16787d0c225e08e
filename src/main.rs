use std::sync::Arc;

use axum::{routing::get, Router};
use tokio::sync::RwLock;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;

mod config;
mod error;
mod handlers;
mod models;
mod store;

use crate::config::Config;
use crate::store::ItemStore;

/// Shared application state; cheap to clone (all heap behind Arc).
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<RwLock<ItemStore>>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env if present (ignored in production where env vars are injected)
    dotenv::dotenv().ok();

    // Structured logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,menu_service=debug".parse().unwrap()),
        )
        .with_target(false)
        .compact()
        .init();

    let config = Config::from_env()?;

    info!("╔══════════════════════════════════════╗");
    info!("║  Menu Service  ·  Rust + Axum        ║");
    info!("║  In-memory items CRUD                ║");
    info!("╚══════════════════════════════════════╝");

    let state = AppState {
        store: Arc::new(RwLock::new(ItemStore::new())),
    };

    let app = build_router(state, &config.base_path);

    let addr = format!("{}:{}", config.host, config.port);
    info!("Listening on http://{}", addr);
    info!("Items mounted at http://{}{}", addr, config.base_path);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

fn build_router(state: AppState, base_path: &str) -> Router {
    // ── Items CRUD ──────────────────────────────────────────────────────
    let items = Router::new()
        .route(
            "/",
            get(handlers::items::list_items).post(handlers::items::create_item),
        )
        .route(
            "/:id",
            get(handlers::items::get_item)
                .put(handlers::items::update_item)
                .delete(handlers::items::delete_item),
        );

    Router::new()
        // ── Health ──────────────────────────────────────────────────────────
        .route("/health", get(handlers::health))
        .nest(base_path, items)
        // ── Middleware ──────────────────────────────────────────────────────
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
