// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Fumen (chart project) data structures.
//!
//! A fumen holds the song metadata, the paths of its music and jacket
//! files, and one chart per difficulty keyed by an identifier such as
//! `"BSC"`, `"ADV"` or `"EXT"`.

use serde::de::{MapAccess, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::path::PathBuf;

/// A single note on the 4x4 button grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Note {
    /// Button position, 0 to 15.
    #[serde(rename = "n")]
    pub position: u8,
    /// Timing in ticks.
    #[serde(rename = "t")]
    pub tick: u32,
    /// Long note length in ticks, 0 for a tap.
    #[serde(rename = "l", default)]
    pub length: u32,
    /// Long note tail position.
    #[serde(rename = "p", default)]
    pub tail: u8,
}

/// One playable difficulty of a fumen.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Chart {
    pub level: u32,
    /// Ticks per beat.
    pub resolution: u32,
    #[serde(default)]
    pub notes: Vec<Note>,
}

impl Chart {
    /// Create an empty chart.
    pub fn new(level: u32, resolution: u32) -> Self {
        Self {
            level,
            resolution,
            notes: Vec::new(),
        }
    }
}

/// Charts keyed by identifier, kept in insertion order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ChartSet {
    entries: Vec<(String, Chart)>,
}

impl ChartSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a chart. An existing identifier keeps its position and gets
    /// the new chart; the previous one is returned.
    pub fn insert(&mut self, id: impl Into<String>, chart: Chart) -> Option<Chart> {
        let id = id.into();
        match self.entries.iter_mut().find(|(key, _)| *key == id) {
            Some((_, existing)) => Some(std::mem::replace(existing, chart)),
            None => {
                self.entries.push((id, chart));
                None
            }
        }
    }

    pub fn get(&self, id: &str) -> Option<&Chart> {
        self.entries
            .iter()
            .find(|(key, _)| key == id)
            .map(|(_, chart)| chart)
    }

    pub fn contains_key(&self, id: &str) -> bool {
        self.get(id).is_some()
    }

    /// First identifier in stored order.
    pub fn first_key(&self) -> Option<&str> {
        self.entries.first().map(|(key, _)| key.as_str())
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(key, _)| key.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Chart)> {
        self.entries.iter().map(|(key, chart)| (key.as_str(), chart))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Serialize for ChartSet {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_map(self.entries.iter().map(|(key, chart)| (key, chart)))
    }
}

impl<'de> Deserialize<'de> for ChartSet {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct ChartSetVisitor;

        impl<'de> Visitor<'de> for ChartSetVisitor {
            type Value = ChartSet;

            fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                f.write_str("a map of chart identifiers to charts")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<ChartSet, A::Error> {
                let mut charts = ChartSet::new();
                while let Some((id, chart)) = map.next_entry::<String, Chart>()? {
                    if charts.contains_key(&id) {
                        return Err(serde::de::Error::custom(format!(
                            "duplicate chart \"{}\"",
                            id
                        )));
                    }
                    charts.insert(id, chart);
                }
                Ok(charts)
            }
        }

        deserializer.deserialize_map(ChartSetVisitor)
    }
}

/// A complete fumen as held by the editor.
#[derive(Debug, Clone, PartialEq)]
pub struct ProjectDocument {
    pub title: String,
    pub artist: String,
    /// Music file, relative to the directory of `path`.
    pub music_path: String,
    /// Jacket image, relative to the directory of `path`.
    pub jacket_path: String,
    pub bpm: f64,
    /// Seconds between the start of the music and tick 0.
    pub offset: f64,
    pub charts: ChartSet,
    /// Absolute location of the fumen file itself.
    pub path: PathBuf,
}

impl ProjectDocument {
    /// Create an empty fumen that will be saved at `path`.
    pub fn new(path: PathBuf) -> Self {
        Self {
            title: String::new(),
            artist: String::new(),
            music_path: String::new(),
            jacket_path: String::new(),
            bpm: 120.0,
            offset: 0.0,
            charts: ChartSet::new(),
            path,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_chart_set_keeps_insertion_order() {
        let mut charts = ChartSet::new();
        charts.insert("EXT", Chart::new(10, 240));
        charts.insert("BSC", Chart::new(3, 240));
        charts.insert("ADV", Chart::new(7, 240));

        let keys: Vec<&str> = charts.keys().collect();
        assert_eq!(keys, vec!["EXT", "BSC", "ADV"]);
        assert_eq!(charts.first_key(), Some("EXT"));
    }

    #[test]
    fn test_chart_set_insert_replaces_in_place() {
        let mut charts = ChartSet::new();
        charts.insert("BSC", Chart::new(3, 240));
        charts.insert("ADV", Chart::new(7, 240));

        let previous = charts.insert("BSC", Chart::new(4, 240));
        assert_eq!(previous.map(|c| c.level), Some(3));
        assert_eq!(charts.len(), 2);
        assert_eq!(charts.first_key(), Some("BSC"));
        assert_eq!(charts.get("BSC").map(|c| c.level), Some(4));
    }

    #[test]
    fn test_chart_set_deserialize_preserves_file_order() {
        let json = r#"{"EXT": {"level": 10, "resolution": 240},
                       "BSC": {"level": 3, "resolution": 240, "notes": [{"n": 5, "t": 0}]}}"#;
        let charts: ChartSet = serde_json::from_str(json).unwrap();

        let keys: Vec<&str> = charts.keys().collect();
        assert_eq!(keys, vec!["EXT", "BSC"]);
        let note = charts.get("BSC").unwrap().notes[0];
        assert_eq!(note.position, 5);
        assert_eq!(note.length, 0);
    }

    #[test]
    fn test_chart_set_rejects_duplicate_ids() {
        let json = r#"{"BSC": {"level": 3, "resolution": 240},
                       "BSC": {"level": 4, "resolution": 240}}"#;
        let result: Result<ChartSet, _> = serde_json::from_str(json);
        assert!(result.is_err());
    }

    #[test]
    fn test_empty_document() {
        let doc = ProjectDocument::new(PathBuf::from("/proj/untitled.memon"));
        assert!(doc.charts.is_empty());
        assert!(doc.music_path.is_empty());
        assert_eq!(doc.charts.first_key(), None);
    }
}
