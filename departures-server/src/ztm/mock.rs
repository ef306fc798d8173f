//! Mock departures client for testing without network access.
//!
//! Boards are registered per stop id; unknown stops answer with an
//! empty response, and stops marked failing answer with an error, which
//! lets tests exercise the fail-open aggregation path.

use std::collections::{HashMap, HashSet};

use crate::config::StopId;

use super::error::ZtmError;
use super::types::{DeparturesResponse, RawDeparture};

/// Mock departures client serving canned responses.
#[derive(Debug, Clone, Default)]
pub struct MockZtmClient {
    boards: HashMap<StopId, DeparturesResponse>,
    failing: HashSet<StopId>,
}

impl MockZtmClient {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register departures for a stop.
    pub fn with_departures(mut self, stop: StopId, departures: Vec<RawDeparture>) -> Self {
        self.boards.insert(
            stop,
            DeparturesResponse {
                last_update: None,
                departures,
            },
        );
        self
    }

    /// Make a stop answer with a connection-style error.
    pub fn with_failure(mut self, stop: StopId) -> Self {
        self.failing.insert(stop);
        self
    }

    /// Mimics `ZtmClient::departures`.
    pub async fn departures(&self, stop: StopId) -> Result<DeparturesResponse, ZtmError> {
        if self.failing.contains(&stop) {
            return Err(ZtmError::Api {
                status: 0,
                message: "connection refused (mock)".to_string(),
            });
        }

        Ok(self.boards.get(&stop).cloned().unwrap_or_default())
    }
}
