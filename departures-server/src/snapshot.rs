//! Snapshot writer: flat-text rendering of all boards to a file.
//!
//! The file is overwritten wholesale on every write. There is no
//! locking; the single-operator deployment accepts that concurrent
//! writers could interleave.

use std::path::Path;

use crate::board::{DepartureSource, StopBoard, collect_boards};
use crate::config::StopRegistry;
use crate::ztm::departure_line;

/// Fixed relative path of the snapshot file.
pub const SNAPSHOT_PATH: &str = "output/departures.txt";

/// Error writing the snapshot.
///
/// Write failures are fatal to the triggering operation; there is no
/// partial-write recovery.
#[derive(Debug, thiserror::Error)]
pub enum SnapshotError {
    #[error("failed to write snapshot: {0}")]
    Io(#[from] std::io::Error),
}

/// Render all boards as flat text: each stop's label, one line per
/// departure, then a blank separator line.
pub fn render_snapshot(boards: &[StopBoard]) -> String {
    let mut out = String::new();

    for board in boards {
        out.push_str(&board.label);
        out.push_str(":\n");
        for dep in board.outcome.departures() {
            out.push_str(&departure_line(dep));
            out.push('\n');
        }
        out.push('\n');
    }

    out
}

/// Re-run fetch + normalize for every registered stop and overwrite the
/// snapshot file with the result.
///
/// Creates the parent directory on first use.
pub async fn write_snapshot<S: DepartureSource>(
    source: &S,
    stops: &StopRegistry,
    path: impl AsRef<Path>,
) -> Result<(), SnapshotError> {
    let path = path.as_ref();
    let boards = collect_boards(source, stops).await;
    let text = render_snapshot(&boards);

    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }
    std::fs::write(path, text)?;

    tracing::info!(path = %path.display(), stops = stops.len(), "snapshot written");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::StopId;
    use crate::ztm::RawDeparture;
    use crate::ztm::mock::MockZtmClient;

    fn registry() -> StopRegistry {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("stops.json");
        std::fs::write(&path, r#"{"Stop A": 1, "Stop B": 2}"#).unwrap();
        StopRegistry::load(&path).unwrap()
    }

    fn mock() -> MockZtmClient {
        MockZtmClient::new().with_departures(
            StopId(1),
            vec![
                RawDeparture {
                    route_short_name: Some("210".into()),
                    headsign: Some("Osowa".into()),
                    estimated_time: Some("2024-01-15T10:30:00Z".into()),
                    theoretical_time: None,
                    delay_in_seconds: Some(125),
                },
                RawDeparture {
                    route_short_name: Some("8".into()),
                    headsign: Some("Jelitkowo".into()),
                    estimated_time: None,
                    theoretical_time: Some("2024-01-15T10:35:00Z".into()),
                    delay_in_seconds: None,
                },
            ],
        )
    }

    #[tokio::test]
    async fn snapshot_lists_each_stop_once_with_departure_lines() {
        let boards = collect_boards(&mock(), &registry()).await;
        let text = render_snapshot(&boards);

        assert_eq!(text.matches("Stop A:").count(), 1);
        assert_eq!(text.matches("Stop B:").count(), 1);
        assert!(text.contains(
            "Route: 210, Direction: Osowa, Local time: 11:30:00, Delay: 2 min 5 s"
        ));
        assert!(text.contains(
            "Route: 8, Direction: Jelitkowo, Local time: 11:35:00, Delay: no data"
        ));

        // blank separator line after each section
        assert!(text.contains("Delay: no data\n\n"));
        assert!(text.ends_with("Stop B:\n\n"));
    }

    #[tokio::test]
    async fn write_creates_parent_directory_and_overwrites() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("output").join("departures.txt");
        let stops = registry();

        write_snapshot(&mock(), &stops, &path).await.unwrap();
        let first = std::fs::read_to_string(&path).unwrap();
        assert!(first.contains("Stop A:"));

        // second write replaces, never appends
        write_snapshot(&MockZtmClient::new(), &stops, &path)
            .await
            .unwrap();
        let second = std::fs::read_to_string(&path).unwrap();
        assert_eq!(second.matches("Stop A:").count(), 1);
        assert!(!second.contains("Route: 210"));
    }

    #[tokio::test]
    async fn write_failure_propagates() {
        let dir = tempfile::tempdir().unwrap();
        // a directory at the target path makes the write fail
        let path = dir.path().join("departures.txt");
        std::fs::create_dir(&path).unwrap();

        let result = write_snapshot(&mock(), &registry(), &path).await;
        assert!(matches!(result, Err(SnapshotError::Io(_))));
    }
}
