use std::{net::SocketAddr, path::Path, sync::Arc};

use axum::{routing::get, Router};
use tower_http::{services::ServeDir, trace::TraceLayer};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

mod app_state;
mod config;
mod pages;

use app_state::AppState;
use config::{load_catalog, load_settings, SETTINGS_FILE};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let (settings, file_error) = load_settings();
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(&settings.log_filter))
        .init();
    if let Some(error) = file_error {
        warn!(%error, file = SETTINGS_FILE, "ignoring unreadable settings file");
    }

    let catalog = load_catalog(&settings)?;
    let state = AppState { catalog };
    let app = build_router(Arc::new(state), &settings.static_dir);

    let addr: SocketAddr = settings.server_bind.parse()?;
    info!(%addr, static_dir = %settings.static_dir.display(), "server listening");
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;
    Ok(())
}

fn build_router(state: Arc<AppState>, static_dir: &Path) -> Router {
    Router::new()
        .route("/healthz", get(healthz))
        .route("/airport/:identifier", get(pages::airport::get))
        .route("/runway", get(pages::runway::get))
        .route(
            "/aircraft/cessna150j/take-off",
            get(pages::aircraft::cessna150j::get_take_off),
        )
        .route(
            "/aircraft/cessna150j/landing",
            get(pages::aircraft::cessna150j::get_landing),
        )
        .route(
            "/aircraft/cessna172m/take-off",
            get(pages::aircraft::cessna172m::get_take_off),
        )
        .route(
            "/aircraft/cessna172m/landing",
            get(pages::aircraft::cessna172m::get_landing),
        )
        .fallback_service(ServeDir::new(static_dir))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn healthz() -> &'static str {
    "ok"
}

#[cfg(test)]
#[path = "tests/main_tests.rs"]
mod tests;
