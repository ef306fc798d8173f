//! Departures feed response DTOs.
//!
//! These types map directly to the upstream JSON. Every departure field
//! is `Option` because the feed omits or nulls fields freely.

use serde::Deserialize;

/// Response from `GET /departures?stopId={id}`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeparturesResponse {
    /// When the feed last refreshed this stop (ISO 8601), if reported.
    #[serde(default)]
    pub last_update: Option<String>,

    /// Departures in feed order. Missing key means no departures.
    #[serde(default)]
    pub departures: Vec<RawDeparture>,
}

/// One raw departure record as served by the feed.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawDeparture {
    /// Route number shown on the vehicle (e.g. "210").
    pub route_short_name: Option<String>,

    /// Direction / destination sign.
    pub headsign: Option<String>,

    /// Real-time estimated departure, ISO-8601 UTC. Preferred.
    pub estimated_time: Option<String>,

    /// Timetabled departure, ISO-8601 UTC. Fallback.
    pub theoretical_time: Option<String>,

    /// Signed delay in seconds; absent means "no data", not zero.
    pub delay_in_seconds: Option<i64>,
}
