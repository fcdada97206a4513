// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Memon file serialization and deserialization.
//!
//! Memon is the JSON chart format used by the editor. Only the fields the
//! editor knows about are kept; a document is either fully read or the
//! whole load fails.

use crate::loader::ChartStorage;
use crate::models::fumen::{ChartSet, ProjectDocument};
use crate::util::paths;
use anyhow::{bail, Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Version written by the editor.
pub const MEMON_VERSION: &str = "0.1.0";

#[derive(Debug, Serialize, Deserialize)]
struct MemonFile {
    version: String,
    metadata: MemonMetadata,
    data: ChartSet,
}

#[derive(Debug, Serialize, Deserialize)]
struct MemonMetadata {
    #[serde(rename = "song title", default)]
    title: String,
    #[serde(default)]
    artist: String,
    #[serde(rename = "music path", default)]
    music_path: String,
    #[serde(rename = "jacket path", default)]
    jacket_path: String,
    #[serde(rename = "BPM", default = "default_bpm")]
    bpm: f64,
    #[serde(default)]
    offset: f64,
}

fn default_bpm() -> f64 {
    120.0
}

/// Parse memon text into a document located at `path`.
pub fn parse(text: &str, path: &Path) -> Result<ProjectDocument> {
    let file: MemonFile = serde_json::from_str(text).context("Invalid memon file")?;
    if !file.version.starts_with("0.") {
        bail!("Unsupported memon version {}", file.version);
    }
    validate(&file)?;

    Ok(ProjectDocument {
        title: file.metadata.title,
        artist: file.metadata.artist,
        music_path: file.metadata.music_path,
        jacket_path: file.metadata.jacket_path,
        bpm: file.metadata.bpm,
        offset: file.metadata.offset,
        charts: file.data,
        path: paths::absolutize(path),
    })
}

fn validate(file: &MemonFile) -> Result<()> {
    if !(file.metadata.bpm.is_finite() && file.metadata.bpm > 0.0) {
        bail!("Invalid BPM {}", file.metadata.bpm);
    }
    for (id, chart) in file.data.iter() {
        if chart.resolution == 0 {
            bail!("Chart {} has a resolution of 0", id);
        }
        if let Some(note) = chart.notes.iter().find(|n| n.position > 15) {
            bail!(
                "Chart {} has a note at position {} (tick {})",
                id,
                note.position,
                note.tick
            );
        }
    }
    Ok(())
}

/// Render a document as pretty memon JSON.
pub fn to_string(document: &ProjectDocument) -> Result<String> {
    let file = MemonFile {
        version: MEMON_VERSION.to_string(),
        metadata: MemonMetadata {
            title: document.title.clone(),
            artist: document.artist.clone(),
            music_path: document.music_path.clone(),
            jacket_path: document.jacket_path.clone(),
            bpm: document.bpm,
            offset: document.offset,
        },
        data: document.charts.clone(),
    };
    Ok(serde_json::to_string_pretty(&file)?)
}

/// Memon files on the local filesystem.
#[derive(Debug, Default, Clone, Copy)]
pub struct MemonStorage;

impl ChartStorage for MemonStorage {
    fn load_document(&self, path: &Path) -> Result<ProjectDocument> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("Could not read {}", path.display()))?;
        parse(&text, path).with_context(|| format!("Could not load {}", path.display()))
    }

    fn save_document(&self, document: &ProjectDocument) -> Result<()> {
        let text = to_string(document)?;
        std::fs::write(&document.path, text)
            .with_context(|| format!("Could not write {}", document.path.display()))?;
        Ok(())
    }
}
