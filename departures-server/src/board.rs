//! Per-stop board aggregation.
//!
//! Runs the fetch + normalize pipeline over the whole registry,
//! sequentially and fail-open: a stop whose fetch errors renders the
//! same as a stop with no scheduled service, so one upstream outage
//! never breaks the page. The outcome type keeps the distinction
//! available to callers that want it.

use std::future::Future;

use crate::config::{StopId, StopRegistry};
use crate::ztm::{
    Departure, DeparturesResponse, LOCAL_ZONE, ZtmClient, ZtmError, normalize_departures,
};

/// Anything that can answer a per-stop departures query.
///
/// The seam between the aggregation pipeline and the HTTP client; the
/// mock client implements it for tests.
pub trait DepartureSource {
    fn departures(
        &self,
        stop: StopId,
    ) -> impl Future<Output = Result<DeparturesResponse, ZtmError>> + Send;
}

impl DepartureSource for ZtmClient {
    async fn departures(&self, stop: StopId) -> Result<DeparturesResponse, ZtmError> {
        ZtmClient::departures(self, stop).await
    }
}

impl DepartureSource for crate::ztm::mock::MockZtmClient {
    async fn departures(&self, stop: StopId) -> Result<DeparturesResponse, ZtmError> {
        crate::ztm::mock::MockZtmClient::departures(self, stop).await
    }
}

/// Result of fetching one stop.
///
/// Display code treats `NoDepartures` and `Failed` identically (empty
/// board); the variants stay distinct so a future caller can alert on
/// failures without re-plumbing the pipeline.
#[derive(Debug)]
pub enum FetchOutcome {
    /// At least one departure was returned.
    Departures(Vec<Departure>),
    /// The fetch succeeded but the stop has nothing scheduled.
    NoDepartures,
    /// The fetch failed; the error is kept for inspection.
    Failed(ZtmError),
}

impl FetchOutcome {
    /// Departures to display; empty for `NoDepartures` and `Failed`.
    pub fn departures(&self) -> &[Departure] {
        match self {
            FetchOutcome::Departures(deps) => deps,
            _ => &[],
        }
    }

    pub fn is_failed(&self) -> bool {
        matches!(self, FetchOutcome::Failed(_))
    }
}

/// One stop's share of the page.
#[derive(Debug)]
pub struct StopBoard {
    /// Display label (separator-replaced, title-cased).
    pub label: String,
    pub stop_id: StopId,
    pub outcome: FetchOutcome,
}

/// Fetch and normalize every registered stop, in registry order.
///
/// Fetches run one at a time; a slow upstream inflates page latency
/// bounded by the per-request timeout.
pub async fn collect_boards<S: DepartureSource>(
    source: &S,
    stops: &StopRegistry,
) -> Vec<StopBoard> {
    let mut boards = Vec::with_capacity(stops.len());

    for entry in stops.iter() {
        let outcome = match source.departures(entry.id).await {
            Ok(response) => {
                let departures = normalize_departures(&response, LOCAL_ZONE);
                if departures.is_empty() {
                    FetchOutcome::NoDepartures
                } else {
                    FetchOutcome::Departures(departures)
                }
            }
            Err(e) => {
                tracing::warn!(stop = %entry.id, "departures fetch failed: {e}");
                FetchOutcome::Failed(e)
            }
        };

        boards.push(StopBoard {
            label: entry.display_label(),
            stop_id: entry.id,
            outcome,
        });
    }

    boards
}
