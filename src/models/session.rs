// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Live editing session.
//!
//! The session owns the open fumen, the selected chart and the music and
//! jacket slots, and keeps the slots in sync with the paths stored in the
//! fumen.

use crate::io::media::{Jacket, Music};
use crate::loader::ChartStorage;
use crate::models::fumen::ProjectDocument;
use crate::models::playback::PlaybackBridge;
use crate::models::resource::{Decode, ResourceSlot};
use crate::util::paths;
use anyhow::Result;

/// Decoders used to fill the session's resource slots.
pub struct Decoders {
    pub music: Box<dyn Decode<Music>>,
    pub jacket: Box<dyn Decode<Jacket>>,
}

/// The fumen being edited and everything derived from it.
pub struct ProjectSession {
    document: ProjectDocument,
    selected_chart: Option<String>,
    music: ResourceSlot<Music>,
    jacket: ResourceSlot<Jacket>,
    decoders: Decoders,
}

impl ProjectSession {
    /// Start a session on `document` and load its resources.
    pub fn new(document: ProjectDocument, decoders: Decoders) -> Self {
        let mut session = Self {
            document,
            selected_chart: None,
            music: ResourceSlot::new(),
            jacket: ResourceSlot::new(),
            decoders,
        };
        session.reload_all();
        session
    }

    /// Swap in a freshly loaded document and reload everything from it.
    pub fn replace_document(&mut self, document: ProjectDocument) {
        self.document = document;
        self.reload_all();
    }

    /// Reload both slots and select the first chart.
    pub fn reload_all(&mut self) {
        self.selected_chart = self.document.charts.first_key().map(str::to_owned);
        self.reload_music();
        self.reload_jacket();
    }

    pub fn on_audio_path_edited(&mut self, new_path: String) {
        self.document.music_path = new_path;
        self.reload_music();
    }

    pub fn on_image_path_edited(&mut self, new_path: String) {
        self.document.jacket_path = new_path;
        self.reload_jacket();
    }

    fn reload_music(&mut self) {
        let path = paths::resolve(&self.document.path, &self.document.music_path);
        self.music.reload(self.decoders.music.as_ref(), path);
    }

    fn reload_jacket(&mut self) {
        let path = paths::resolve(&self.document.path, &self.document.jacket_path);
        self.jacket.reload(self.decoders.jacket.as_ref(), path);
    }

    pub fn document(&self) -> &ProjectDocument {
        &self.document
    }

    pub fn title_mut(&mut self) -> &mut String {
        &mut self.document.title
    }

    pub fn artist_mut(&mut self) -> &mut String {
        &mut self.document.artist
    }

    pub fn selected_chart(&self) -> Option<&str> {
        self.selected_chart.as_deref()
    }

    /// Select a chart by identifier. Unknown identifiers are refused.
    pub fn select_chart(&mut self, id: &str) -> bool {
        if self.document.charts.contains_key(id) {
            self.selected_chart = Some(id.to_owned());
            true
        } else {
            false
        }
    }

    pub fn music(&self) -> &ResourceSlot<Music> {
        &self.music
    }

    pub fn jacket(&self) -> &ResourceSlot<Jacket> {
        &self.jacket
    }

    pub fn playback(&mut self) -> PlaybackBridge<'_> {
        PlaybackBridge::new(&mut self.music)
    }

    /// Problems worth showing in the status window.
    pub fn status_lines(&self) -> Vec<String> {
        let mut lines = Vec::new();
        if !self.music.is_loaded() {
            if self.document.music_path.is_empty() {
                lines.push("No music file loaded".to_string());
            } else {
                lines.push(format!("Invalid music path : {}", self.document.music_path));
            }
        }
        if !self.jacket.is_loaded() {
            if self.document.jacket_path.is_empty() {
                lines.push("No jacket loaded".to_string());
            } else {
                lines.push(format!("Invalid jacket path : {}", self.document.jacket_path));
            }
        }
        lines
    }

    /// Write the document through `storage`. The session is not modified.
    pub fn save(&self, storage: &dyn ChartStorage) -> Result<()> {
        storage.save_document(&self.document)
    }
}
