//! Gdańsk public-transit departures client.
//!
//! This module provides an HTTP client for the open departures feed,
//! which serves real-time estimates per stop.
//!
//! Key characteristics of the feed:
//! - One request per stop: `GET /departures?stopId={id}`
//! - Timestamps are ISO-8601 instants in UTC (`Z` suffix)
//! - Every departure field is optional; `delayInSeconds` absent means
//!   "unknown", which is distinct from 0 ("on schedule")

mod client;
mod convert;
mod error;
pub mod mock;
mod types;

pub use client::{ZtmClient, ZtmConfig};
pub use convert::{
    ConversionError, Departure, LOCAL_ZONE, departure_line, format_delay, normalize_departure,
    normalize_departures,
};
pub use error::ZtmError;
pub use types::{DeparturesResponse, RawDeparture};
