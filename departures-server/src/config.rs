//! Stop registry configuration.
//!
//! The set of watched stops is loaded once at startup from a JSON file
//! mapping stop labels to numeric stop identifiers. A missing file is
//! not an error: four built-in defaults are used instead.

use std::collections::BTreeMap;
use std::fmt;
use std::path::Path;

use serde::Deserialize;

/// Default location of the stops file, relative to the working directory.
pub const DEFAULT_STOPS_PATH: &str = "config/stops.json";

/// Error loading the stop registry.
///
/// Only raised when a stops file *exists* but cannot be used; a missing
/// file falls back to the built-in defaults.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// The stops file could not be read
    #[error("failed to read stops file: {0}")]
    Io(#[from] std::io::Error),

    /// The stops file is not a valid label → id mapping
    #[error("failed to parse stops file: {0}")]
    Json(#[from] serde_json::Error),
}

/// Numeric stop identifier understood by the upstream API.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Deserialize)]
#[serde(transparent)]
pub struct StopId(pub u32);

impl fmt::Display for StopId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// One watched stop: a human-readable label and the upstream identifier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StopEntry {
    /// Raw label as configured; may contain `_` separators
    pub label: String,
    /// Upstream stop identifier
    pub id: StopId,
}

impl StopEntry {
    pub fn new(label: impl Into<String>, id: u32) -> Self {
        Self {
            label: label.into(),
            id: StopId(id),
        }
    }

    /// Label as shown on the page: separators replaced by spaces, each
    /// word title-cased.
    pub fn display_label(&self) -> String {
        self.label
            .replace('_', " ")
            .split(' ')
            .map(capitalize_word)
            .collect::<Vec<_>>()
            .join(" ")
    }
}

/// Uppercase the first character of a word, lowercase the rest.
fn capitalize_word(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        None => String::new(),
        Some(first) => {
            let mut out: String = first.to_uppercase().collect();
            out.extend(chars.flat_map(|c| c.to_lowercase()));
            out
        }
    }
}

/// Immutable, ordered set of watched stops.
///
/// Built once during process startup and passed by value into the
/// components that need it; there is no ambient global registry.
#[derive(Debug, Clone)]
pub struct StopRegistry {
    entries: Vec<StopEntry>,
}

impl StopRegistry {
    /// The four built-in stops used when no stops file is present.
    pub fn defaults() -> Self {
        Self {
            entries: vec![
                StopEntry::new("Brama Wyżynna 01", 1562),
                StopEntry::new("Brama Wyżynna 02", 1563),
                StopEntry::new("Dworzec Główny 01", 1794),
                StopEntry::new("Dworzec PKS", 1795),
            ],
        }
    }

    /// Load the registry from a JSON file mapping label → id.
    ///
    /// A missing file yields the defaults. A file that exists but cannot
    /// be read or parsed is a startup error.
    ///
    /// File entries are kept in lexicographic label order so the page
    /// renders deterministically regardless of JSON key order.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        if !path.exists() {
            return Ok(Self::defaults());
        }

        let json = std::fs::read_to_string(path)?;
        let map: BTreeMap<String, StopId> = serde_json::from_str(&json)?;

        let entries = map
            .into_iter()
            .map(|(label, id)| StopEntry { label, id })
            .collect();

        Ok(Self { entries })
    }

    /// Iterate stops in display order.
    pub fn iter(&self) -> impl Iterator<Item = &StopEntry> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn defaults_has_four_stops() {
        let registry = StopRegistry::defaults();
        assert_eq!(registry.len(), 4);
        assert_eq!(registry.iter().next().unwrap().id, StopId(1562));
    }

    #[test]
    fn display_label_replaces_separators_and_title_cases() {
        let entry = StopEntry::new("dworzec_glowny 01", 1794);
        assert_eq!(entry.display_label(), "Dworzec Glowny 01");
    }

    #[test]
    fn display_label_lowercases_tail_of_words() {
        // title-casing rewrites acronyms too: "PKS" becomes "Pks"
        let entry = StopEntry::new("Dworzec PKS", 1795);
        assert_eq!(entry.display_label(), "Dworzec Pks");
    }

    #[test]
    fn display_label_keeps_unicode() {
        let entry = StopEntry::new("brama wyżynna 01", 1562);
        assert_eq!(entry.display_label(), "Brama Wyżynna 01");
    }

    #[test]
    fn load_missing_file_falls_back_to_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let registry = StopRegistry::load(dir.path().join("stops.json")).unwrap();
        assert_eq!(registry.len(), 4);
    }

    #[test]
    fn load_reads_mapping_in_label_order() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("stops.json");
        let mut file = std::fs::File::create(&path).unwrap();
        write!(file, r#"{{"Z Stop": 2, "A Stop": 1}}"#).unwrap();

        let registry = StopRegistry::load(&path).unwrap();
        let labels: Vec<_> = registry.iter().map(|e| e.label.as_str()).collect();
        assert_eq!(labels, vec!["A Stop", "Z Stop"]);
        assert_eq!(registry.iter().next().unwrap().id, StopId(1));
    }

    #[test]
    fn load_malformed_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("stops.json");
        std::fs::write(&path, "not json").unwrap();

        assert!(StopRegistry::load(&path).is_err());
    }
}
