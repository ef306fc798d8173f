//! Variant 2: table departures board with snapshot-to-file support.

use std::net::SocketAddr;

use departures_server::config::{DEFAULT_STOPS_PATH, StopRegistry};
use departures_server::snapshot::{SNAPSHOT_PATH, write_snapshot};
use departures_server::web::{AppState, table_router};
use departures_server::ztm::{ZtmClient, ZtmConfig};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let stops_path =
        std::env::var("STOPS_CONFIG").unwrap_or_else(|_| DEFAULT_STOPS_PATH.to_string());
    let stops = StopRegistry::load(&stops_path).expect("failed to load stop registry");
    println!("Watching {} stops", stops.len());

    let mut config = ZtmConfig::new();
    if let Ok(base_url) = std::env::var("ZTM_BASE_URL") {
        config = config.with_base_url(base_url);
    }
    let client = ZtmClient::new(config).expect("failed to create departures client");

    let static_dir =
        std::env::var("STATIC_DIR").unwrap_or_else(|_| "departures-server/static".to_string());

    let state = AppState::new(client, stops, SNAPSHOT_PATH);

    // Initial snapshot before serving; a write failure here is fatal
    write_snapshot(
        state.source.as_ref(),
        &state.stops,
        state.snapshot_path.as_ref(),
    )
    .await
    .expect("failed to write initial snapshot");

    let app = table_router(state, &static_dir);

    let addr = SocketAddr::from(([0, 0, 0, 0], 3000));
    println!("Departures board (table) listening on http://{addr}");
    println!();
    println!("Endpoints:");
    println!("  GET  /           - departures page");
    println!("  POST /zapisz     - write the snapshot file");
    println!("  POST /aktualizuj - reload the page");
    println!("  GET  /plik       - download the snapshot file");

    let listener = tokio::net::TcpListener::bind(addr).await.unwrap();
    axum::serve(listener, app).await.unwrap();
}
