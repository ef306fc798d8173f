//! Askama templates and their view models.
//!
//! View models hold only pre-formatted strings; all formatting happens
//! in Rust so the templates stay logic-free.

use askama::Template;
use chrono::Utc;

use crate::board::StopBoard;
use crate::ztm::{Departure, LOCAL_ZONE, departure_line};

/// Plain-text board page (variant 1).
#[derive(Template)]
#[template(path = "text_board.html")]
pub struct TextBoardTemplate {
    pub current_time: String,
    pub stops: Vec<TextStopView>,
}

/// Table board page (variant 2).
#[derive(Template)]
#[template(path = "table_board.html")]
pub struct TableBoardTemplate {
    pub current_time: String,
    pub stops: Vec<TableStopView>,
}

/// One stop rendered as preformatted text.
#[derive(Debug, Clone)]
pub struct TextStopView {
    pub name: String,
    /// One `departure_line` per departure, newline separated.
    pub body: String,
    pub has_departures: bool,
}

impl TextStopView {
    pub fn from_board(board: &StopBoard) -> Self {
        let departures = board.outcome.departures();
        let body = departures
            .iter()
            .map(departure_line)
            .collect::<Vec<_>>()
            .join("\n");

        Self {
            name: board.label.clone(),
            body,
            has_departures: !departures.is_empty(),
        }
    }
}

/// One stop rendered as a table.
#[derive(Debug, Clone)]
pub struct TableStopView {
    pub name: String,
    pub rows: Vec<DepartureRow>,
    pub has_departures: bool,
}

impl TableStopView {
    pub fn from_board(board: &StopBoard) -> Self {
        let rows: Vec<DepartureRow> = board
            .outcome
            .departures()
            .iter()
            .map(DepartureRow::from_departure)
            .collect();

        Self {
            name: board.label.clone(),
            has_departures: !rows.is_empty(),
            rows,
        }
    }
}

/// One table row, fully formatted.
#[derive(Debug, Clone)]
pub struct DepartureRow {
    pub route: String,
    pub headsign: String,
    pub local_time: String,
    pub delay: String,
}

impl DepartureRow {
    pub fn from_departure(dep: &Departure) -> Self {
        Self {
            route: dep.route_display(),
            headsign: dep.headsign_display(),
            local_time: dep.local_time_display(),
            delay: dep.delay_display(),
        }
    }
}

/// Current wall-clock time in the board's timezone, as shown in the
/// page header.
pub fn current_time_display() -> String {
    Utc::now()
        .with_timezone(&LOCAL_ZONE)
        .format("%Y-%m-%d %H:%M:%S")
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::collect_boards;
    use crate::config::{StopId, StopRegistry};
    use crate::ztm::RawDeparture;
    use crate::ztm::mock::MockZtmClient;

    fn registry_ab() -> StopRegistry {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("stops.json");
        std::fs::write(&path, r#"{"A": 1, "B": 2}"#).unwrap();
        StopRegistry::load(&path).unwrap()
    }

    fn mock_only_stop_one() -> MockZtmClient {
        MockZtmClient::new().with_departures(
            StopId(1),
            vec![RawDeparture {
                route_short_name: Some("210".into()),
                headsign: Some("Osowa".into()),
                estimated_time: Some("2024-01-15T10:30:00Z".into()),
                theoretical_time: None,
                delay_in_seconds: Some(125),
            }],
        )
    }

    #[tokio::test]
    async fn table_page_shows_table_for_populated_stop_and_notice_for_empty() {
        let boards = collect_boards(&mock_only_stop_one(), &registry_ab()).await;
        let page = TableBoardTemplate {
            current_time: "2024-01-15 11:30:00".into(),
            stops: boards.iter().map(TableStopView::from_board).collect(),
        }
        .render()
        .unwrap();

        // stop A has a real table with the departure in it
        assert!(page.contains("<h2>A</h2>"));
        assert!(page.contains("<table>"));
        assert!(page.contains("<td>210</td>"));
        assert!(page.contains("<td>Osowa</td>"));
        assert!(page.contains("<td>11:30:00</td>"));
        assert!(page.contains("<td>2 min 5 s</td>"));

        // stop B only gets the notice
        assert!(page.contains("<h2>B</h2>"));
        assert!(page.contains("no data for this stop"));
        assert_eq!(page.matches("<table>").count(), 1);
    }

    #[tokio::test]
    async fn table_page_refreshes_every_thirty_seconds() {
        let boards = collect_boards(&mock_only_stop_one(), &registry_ab()).await;
        let page = TableBoardTemplate {
            current_time: String::new(),
            stops: boards.iter().map(TableStopView::from_board).collect(),
        }
        .render()
        .unwrap();

        assert!(page.contains(r#"http-equiv="refresh" content="30""#));
        assert!(page.contains(r#"action="/zapisz""#));
        assert!(page.contains(r#"action="/aktualizuj""#));
    }

    #[tokio::test]
    async fn text_page_embeds_departure_lines_in_pre_blocks() {
        let boards = collect_boards(&mock_only_stop_one(), &registry_ab()).await;
        let page = TextBoardTemplate {
            current_time: "2024-01-15 11:30:00".into(),
            stops: boards.iter().map(TextStopView::from_board).collect(),
        }
        .render()
        .unwrap();

        assert!(page.contains("<pre>"));
        assert!(page.contains(
            "Route: 210, Direction: Osowa, Local time: 11:30:00, Delay: 2 min 5 s"
        ));
        assert!(page.contains("no data for this stop"));
        assert!(page.contains(r#"http-equiv="refresh" content="30""#));
    }

    #[test]
    fn current_time_display_shape() {
        let now = current_time_display();
        // YYYY-MM-DD HH:MM:SS
        assert_eq!(now.len(), 19);
        assert_eq!(&now[4..5], "-");
        assert_eq!(&now[13..14], ":");
    }
}
