//! HTTP route handlers for both board variants.

use axum::{
    Json, Router,
    extract::State,
    http::{StatusCode, header},
    response::{IntoResponse, Redirect, Response},
    routing::{get, post},
};
use serde::Serialize;
use tower_http::services::ServeDir;

use crate::board::{DepartureSource, collect_boards};
use crate::snapshot::{SnapshotError, write_snapshot};

use super::state::AppState;
use super::templates::*;

/// Router for the plain-text board (variant 1).
///
/// `static_dir` is the path to the static assets directory.
pub fn text_router<S>(state: AppState<S>, static_dir: &str) -> Router
where
    S: DepartureSource + Send + Sync + 'static,
{
    Router::new()
        .route("/", get(text_board::<S>))
        .route("/health", get(health))
        .nest_service("/static", ServeDir::new(static_dir))
        .with_state(state)
}

/// Router for the table board with snapshot endpoints (variant 2).
pub fn table_router<S>(state: AppState<S>, static_dir: &str) -> Router
where
    S: DepartureSource + Send + Sync + 'static,
{
    Router::new()
        .route("/", get(table_board::<S>))
        .route("/zapisz", post(save_snapshot::<S>))
        .route("/aktualizuj", post(refresh))
        .route("/plik", get(download_snapshot::<S>))
        .route("/health", get(health))
        .nest_service("/static", ServeDir::new(static_dir))
        .with_state(state)
}

/// Health check endpoint.
async fn health() -> &'static str {
    "ok"
}

/// Plain-text board page.
async fn text_board<S>(State(state): State<AppState<S>>) -> TextBoardTemplate
where
    S: DepartureSource + Send + Sync + 'static,
{
    let boards = collect_boards(state.source.as_ref(), &state.stops).await;

    TextBoardTemplate {
        current_time: current_time_display(),
        stops: boards.iter().map(TextStopView::from_board).collect(),
    }
}

/// Table board page.
async fn table_board<S>(State(state): State<AppState<S>>) -> TableBoardTemplate
where
    S: DepartureSource + Send + Sync + 'static,
{
    let boards = collect_boards(state.source.as_ref(), &state.stops).await;

    TableBoardTemplate {
        current_time: current_time_display(),
        stops: boards.iter().map(TableStopView::from_board).collect(),
    }
}

/// Write the snapshot file, then send the browser back to the board.
async fn save_snapshot<S>(State(state): State<AppState<S>>) -> Result<Redirect, AppError>
where
    S: DepartureSource + Send + Sync + 'static,
{
    write_snapshot(state.source.as_ref(), &state.stops, state.snapshot_path.as_ref()).await?;
    Ok(Redirect::to("/"))
}

/// No-op beyond the implicit re-fetch the redirected page load does.
async fn refresh() -> Redirect {
    Redirect::to("/")
}

/// (Re)write the snapshot, then serve it as a download.
async fn download_snapshot<S>(State(state): State<AppState<S>>) -> Result<Response, AppError>
where
    S: DepartureSource + Send + Sync + 'static,
{
    let path = state.snapshot_path.as_ref();
    write_snapshot(state.source.as_ref(), &state.stops, path).await?;

    let body = std::fs::read(path).map_err(|e| AppError::Internal {
        message: format!("failed to read snapshot back: {e}"),
    })?;

    let filename = path
        .file_name()
        .and_then(|n| n.to_str())
        .unwrap_or("departures.txt");

    let headers = [
        (header::CONTENT_TYPE, "text/plain; charset=utf-8".to_string()),
        (
            header::CONTENT_DISPOSITION,
            format!("attachment; filename=\"{filename}\""),
        ),
    ];

    Ok((headers, body).into_response())
}

/// Application error type.
#[derive(Debug)]
pub enum AppError {
    Internal { message: String },
}

impl From<SnapshotError> for AppError {
    fn from(e: SnapshotError) -> Self {
        AppError::Internal {
            message: e.to_string(),
        }
    }
}

#[derive(Serialize)]
struct ErrorResponse {
    error: String,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let AppError::Internal { message } = self;

        tracing::error!("request failed: {message}");

        let body = Json(ErrorResponse { error: message });
        (StatusCode::INTERNAL_SERVER_ERROR, body).into_response()
    }
}
