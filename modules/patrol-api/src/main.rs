use std::sync::Arc;

use anyhow::Result;
use axum::{
    response::Json,
    routing::{get, post},
    Router,
};
use tracing::info;
use tracing_subscriber::EnvFilter;

use patrol_common::Config;

mod scan;
mod takedown;
mod upload;

pub struct AppState {
    pub config: Config,
}

async fn health() -> Json<serde_json::Value> {
    Json(serde_json::json!({"message": "Lore Patrol API is running"}))
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("patrol_api=info".parse()?))
        .init();

    let config = Config::from_env();
    if config.serpapi_key.is_none() {
        info!("SERPAPI_KEY not set — running in demo mode with the mock fixture");
    }

    let addr = format!("{}:{}", config.api_host, config.api_port);
    let state = Arc::new(AppState { config });

    let app = Router::new()
        .route("/", get(health))
        .route("/scan", post(scan::api_scan))
        .route("/takedown", post(takedown::api_takedown))
        .with_state(state)
        // CORS: the web frontends run on their own dev origins
        .layer(
            tower_http::cors::CorsLayer::new()
                .allow_origin(tower_http::cors::Any)
                .allow_methods(tower_http::cors::Any)
                .allow_headers(tower_http::cors::Any),
        )
        .layer(tower_http::trace::TraceLayer::new_for_http());

    info!(%addr, "Patrol API listening");
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
