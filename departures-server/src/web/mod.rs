//! Web layer for the departures board.
//!
//! Two routers over the same pipeline: the plain-text board and the
//! table board with snapshot endpoints.

mod routes;
mod state;
pub mod templates;

pub use routes::{AppError, table_router, text_router};
pub use state::AppState;
pub use templates::*;
