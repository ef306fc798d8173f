//! Conversion from raw feed records to normalized departures.
//!
//! Timestamps arrive as ISO-8601 UTC instants and are converted to
//! Europe/Warsaw wall-clock time. Absent fields stay absent: "no delay
//! data" is distinct from "delay 0".

use chrono::{DateTime, NaiveTime};
use chrono_tz::Tz;

use super::types::{DeparturesResponse, RawDeparture};

/// Fixed target timezone for displayed times.
pub const LOCAL_ZONE: Tz = chrono_tz::Europe::Warsaw;

/// Placeholder for absent route/headsign/time fields in rendered text.
const ABSENT: &str = "-";

/// Rendered delay string when `delayInSeconds` was absent.
const NO_DATA: &str = "no data";

/// Error during raw → normalized conversion.
#[derive(Debug, Clone, thiserror::Error)]
pub enum ConversionError {
    /// A timestamp was present but not a valid ISO-8601 instant
    #[error("invalid timestamp: {0}")]
    InvalidTimestamp(String),
}

/// One normalized departure.
///
/// Field order matches the feed record; the list order of a stop's
/// departures is the feed order, never re-sorted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Departure {
    /// Route number, if reported.
    pub route: Option<String>,
    /// Direction sign, if reported.
    pub headsign: Option<String>,
    /// Departure time of day in [`LOCAL_ZONE`]; `None` iff the record
    /// carried neither timestamp.
    pub local_time: Option<NaiveTime>,
    /// Signed delay in seconds; `None` means unknown, not zero.
    pub delay_seconds: Option<i64>,
}

impl Departure {
    pub fn route_display(&self) -> String {
        self.route.clone().unwrap_or_else(|| ABSENT.to_string())
    }

    pub fn headsign_display(&self) -> String {
        self.headsign.clone().unwrap_or_else(|| ABSENT.to_string())
    }

    /// Local time as zero-padded 24-hour `HH:MM:SS`, or `-` if absent.
    pub fn local_time_display(&self) -> String {
        match self.local_time {
            Some(t) => t.format("%H:%M:%S").to_string(),
            None => ABSENT.to_string(),
        }
    }

    pub fn delay_display(&self) -> String {
        format_delay(self.delay_seconds)
    }
}

/// Normalize one raw departure record.
///
/// The real-time estimate wins over the timetabled time when both are
/// present; an empty-string timestamp counts as absent. A timestamp that
/// is present but unparseable is an error (callers skip the record).
pub fn normalize_departure(raw: &RawDeparture, zone: Tz) -> Result<Departure, ConversionError> {
    let timestamp = raw
        .estimated_time
        .as_deref()
        .filter(|s| !s.is_empty())
        .or(raw.theoretical_time.as_deref().filter(|s| !s.is_empty()));

    let local_time = match timestamp {
        Some(s) => {
            let instant = DateTime::parse_from_rfc3339(s)
                .map_err(|_| ConversionError::InvalidTimestamp(s.to_string()))?;
            Some(instant.with_timezone(&zone).time())
        }
        None => None,
    };

    Ok(Departure {
        route: raw.route_short_name.clone(),
        headsign: raw.headsign.clone(),
        local_time,
        delay_seconds: raw.delay_in_seconds,
    })
}

/// Normalize a whole feed response, preserving feed order.
///
/// Records with unparseable timestamps are logged and skipped rather
/// than failing the stop.
pub fn normalize_departures(response: &DeparturesResponse, zone: Tz) -> Vec<Departure> {
    let mut out = Vec::with_capacity(response.departures.len());

    for raw in &response.departures {
        match normalize_departure(raw, zone) {
            Ok(dep) => out.push(dep),
            Err(e) => {
                tracing::warn!("skipping departure record: {e}");
            }
        }
    }

    out
}

/// Format a delay for display: `"<min> min <s> s"`, or `"no data"` when
/// the feed reported nothing.
///
/// Division truncates toward zero; a negative delay (early departure)
/// renders its magnitude behind a single leading sign, e.g. -90 →
/// `"-1 min 30 s"`.
pub fn format_delay(delay_seconds: Option<i64>) -> String {
    match delay_seconds {
        Some(d) if d < 0 => format!("-{} min {} s", d.unsigned_abs() / 60, d.unsigned_abs() % 60),
        Some(d) => format!("{} min {} s", d / 60, d % 60),
        None => NO_DATA.to_string(),
    }
}

/// One-line text rendering of a departure, shared by the plain-text
/// board and the snapshot file.
pub fn departure_line(dep: &Departure) -> String {
    format!(
        "Route: {}, Direction: {}, Local time: {}, Delay: {}",
        dep.route_display(),
        dep.headsign_display(),
        dep.local_time_display(),
        dep.delay_display(),
    )
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        /// Non-negative delays recompose exactly from the rendered parts
        #[test]
        fn non_negative_delay_recomposes(d in 0i64..1_000_000) {
            let rendered = format_delay(Some(d));
            let parts: Vec<&str> = rendered.split_whitespace().collect();
            prop_assert_eq!(parts.len(), 4);
            prop_assert_eq!(parts[1], "min");
            prop_assert_eq!(parts[3], "s");

            let mins: i64 = parts[0].parse().unwrap();
            let secs: i64 = parts[2].parse().unwrap();
            prop_assert_eq!(mins * 60 + secs, d);
        }

        /// The seconds component never reaches a full minute
        #[test]
        fn seconds_component_below_sixty(d in proptest::num::i64::ANY) {
            let rendered = format_delay(Some(d));
            let secs: i64 = rendered
                .split_whitespace()
                .nth(2)
                .unwrap()
                .parse()
                .unwrap();
            prop_assert!((0..60).contains(&secs));
        }
    }
}
