//! Application state for the web layer.

use std::path::PathBuf;
use std::sync::Arc;

use crate::config::StopRegistry;

/// Shared application state.
///
/// Generic over the departure source so handlers can run against the
/// mock client in tests.
pub struct AppState<S> {
    /// Upstream departures source
    pub source: Arc<S>,

    /// Immutable stop registry, built once at startup
    pub stops: Arc<StopRegistry>,

    /// Where the snapshot file lives (table variant only)
    pub snapshot_path: Arc<PathBuf>,
}

impl<S> AppState<S> {
    pub fn new(source: S, stops: StopRegistry, snapshot_path: impl Into<PathBuf>) -> Self {
        Self {
            source: Arc::new(source),
            stops: Arc::new(stops),
            snapshot_path: Arc::new(snapshot_path.into()),
        }
    }
}

// Manual impl: `S` itself does not need to be Clone behind the Arc.
impl<S> Clone for AppState<S> {
    fn clone(&self) -> Self {
        Self {
            source: Arc::clone(&self.source),
            stops: Arc::clone(&self.stops),
            snapshot_path: Arc::clone(&self.snapshot_path),
        }
    }
}
