//! Variant 1: plain-text departures board.

use std::net::SocketAddr;

use departures_server::config::{DEFAULT_STOPS_PATH, StopRegistry};
use departures_server::snapshot::SNAPSHOT_PATH;
use departures_server::web::{AppState, text_router};
use departures_server::ztm::{ZtmClient, ZtmConfig};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    // Stop registry: optional file, built-in defaults otherwise
    let stops_path =
        std::env::var("STOPS_CONFIG").unwrap_or_else(|_| DEFAULT_STOPS_PATH.to_string());
    let stops = StopRegistry::load(&stops_path).expect("failed to load stop registry");
    println!("Watching {} stops", stops.len());

    // Departures client, with optional base URL override for testing
    let mut config = ZtmConfig::new();
    if let Ok(base_url) = std::env::var("ZTM_BASE_URL") {
        config = config.with_base_url(base_url);
    }
    let client = ZtmClient::new(config).expect("failed to create departures client");

    let static_dir =
        std::env::var("STATIC_DIR").unwrap_or_else(|_| "departures-server/static".to_string());

    let state = AppState::new(client, stops, SNAPSHOT_PATH);
    let app = text_router(state, &static_dir);

    let addr = SocketAddr::from(([0, 0, 0, 0], 3000));
    println!("Departures board (text) listening on http://{addr}");

    let listener = tokio::net::TcpListener::bind(addr).await.unwrap();
    axum::serve(listener, app).await.unwrap();
}
