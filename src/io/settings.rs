// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Persistent editor settings.
//!
//! Settings live in a JSON file in the platform config directory and hold
//! the recent files list and which windows are shown.

use crate::loader::RecentFiles;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Maximum number of entries kept in the recent files list.
pub const MAX_RECENT_FILES: usize = 10;

/// Which editor windows are visible.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PanelVisibility {
    pub properties: bool,
    pub status: bool,
    pub playback_status: bool,
    pub timeline: bool,
}

impl Default for PanelVisibility {
    fn default() -> Self {
        Self {
            properties: true,
            status: true,
            playback_status: true,
            timeline: true,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Most recent first.
    pub recent_files: Vec<PathBuf>,
    pub panels: PanelVisibility,
}

impl Settings {
    /// Location of the settings file, if the platform has a config dir.
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("fumen-editor").join("settings.json"))
    }

    pub fn load(path: &Path) -> Result<Self> {
        let json = std::fs::read_to_string(path)
            .with_context(|| format!("Could not read {}", path.display()))?;
        let settings = serde_json::from_str(&json)
            .with_context(|| format!("Could not parse {}", path.display()))?;
        Ok(settings)
    }

    /// Load settings, falling back to defaults when the file is missing or
    /// unreadable.
    pub fn load_or_default(path: Option<&Path>) -> Self {
        let Some(path) = path else {
            return Self::default();
        };
        if !path.exists() {
            return Self::default();
        }
        match Self::load(path) {
            Ok(settings) => settings,
            Err(e) => {
                log::warn!("Using default settings: {:#}", e);
                Self::default()
            }
        }
    }

    pub fn save(&self, path: &Path) -> Result<()> {
        if let Some(dir) = path.parent() {
            std::fs::create_dir_all(dir)
                .with_context(|| format!("Could not create {}", dir.display()))?;
        }
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path, json)
            .with_context(|| format!("Could not write {}", path.display()))?;
        Ok(())
    }

    /// Move `path` to the front of the recent files list.
    pub fn push_recent(&mut self, path: &Path) {
        self.recent_files.retain(|p| p != path);
        self.recent_files.insert(0, path.to_path_buf());
        self.recent_files.truncate(MAX_RECENT_FILES);
    }
}

impl RecentFiles for Settings {
    fn record_opened(&mut self, canonical_path: &Path) {
        self.push_recent(canonical_path);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_push_recent_moves_existing_to_front() {
        let mut settings = Settings::default();
        settings.push_recent(Path::new("/a.memon"));
        settings.push_recent(Path::new("/b.memon"));
        settings.push_recent(Path::new("/a.memon"));

        assert_eq!(
            settings.recent_files,
            vec![PathBuf::from("/a.memon"), PathBuf::from("/b.memon")]
        );
    }

    #[test]
    fn test_push_recent_caps_list() {
        let mut settings = Settings::default();
        for i in 0..(MAX_RECENT_FILES + 5) {
            settings.record_opened(&PathBuf::from(format!("/{}.memon", i)));
        }

        assert_eq!(settings.recent_files.len(), MAX_RECENT_FILES);
        assert_eq!(
            settings.recent_files[0],
            PathBuf::from(format!("/{}.memon", MAX_RECENT_FILES + 4))
        );
    }

    #[test]
    fn test_save_and_load_settings() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config").join("settings.json");
        let mut settings = Settings::default();
        settings.push_recent(Path::new("/proj/chart.memon"));
        settings.panels.timeline = false;

        settings.save(&path).unwrap();
        let loaded = Settings::load(&path).unwrap();

        assert_eq!(loaded, settings);
    }

    #[test]
    fn test_malformed_settings_fall_back_to_default() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.json");
        std::fs::write(&path, "not json").unwrap();

        assert_eq!(Settings::load_or_default(Some(&path)), Settings::default());
        assert_eq!(Settings::load_or_default(None), Settings::default());
    }

    #[test]
    fn test_partial_settings_fill_in_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.json");
        std::fs::write(&path, r#"{"panels": {"status": false}}"#).unwrap();

        let settings = Settings::load_or_default(Some(&path));
        assert!(settings.recent_files.is_empty());
        assert!(!settings.panels.status);
        assert!(settings.panels.properties);
    }
}
