// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Opening and saving fumen files.
//!
//! A file is parsed into a complete document before the live session is
//! touched. If anything goes wrong the session stays exactly as it was and
//! the user gets a single error message.

use crate::models::fumen::ProjectDocument;
use crate::models::session::ProjectSession;
use anyhow::Result;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Reads and writes fumen files.
pub trait ChartStorage {
    fn load_document(&self, path: &Path) -> Result<ProjectDocument>;
    fn save_document(&self, document: &ProjectDocument) -> Result<()>;
}

/// Blocking "open file" prompt.
pub trait FileDialog {
    fn choose_file_to_open(&self) -> Option<PathBuf>;
}

/// User-visible, non-fatal error reporting.
pub trait Diagnostics {
    fn report_error(&self, title: &str, message: &str);
}

/// Most recently used files list.
pub trait RecentFiles {
    fn record_opened(&mut self, canonical_path: &Path);
}

/// Human-readable description of a failed open or save.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{title}: {message}")]
pub struct Diagnostic {
    pub title: String,
    pub message: String,
}

impl Diagnostic {
    fn from_error(error: &anyhow::Error, fallback: impl FnOnce() -> String) -> Self {
        let mut message = format!("{:#}", error);
        if message.trim().is_empty() {
            message = fallback();
        }
        Self {
            title: "Error".to_string(),
            message,
        }
    }
}

/// Drives open and save against the live session.
pub struct SessionLoader {
    storage: Box<dyn ChartStorage>,
    dialog: Box<dyn FileDialog>,
    diagnostics: Box<dyn Diagnostics>,
}

impl SessionLoader {
    pub fn new(
        storage: Box<dyn ChartStorage>,
        dialog: Box<dyn FileDialog>,
        diagnostics: Box<dyn Diagnostics>,
    ) -> Self {
        Self {
            storage,
            dialog,
            diagnostics,
        }
    }

    /// Ask the user for a file and open it. Cancelling the prompt is not
    /// an error.
    pub fn open(
        &self,
        session: &mut ProjectSession,
        recent: &mut dyn RecentFiles,
    ) -> Result<(), Diagnostic> {
        match self.dialog.choose_file_to_open() {
            Some(path) => self.open_file(session, recent, &path),
            None => {
                log::debug!("Open cancelled");
                Ok(())
            }
        }
    }

    /// Replace the session's document with the one stored at `path`.
    pub fn open_file(
        &self,
        session: &mut ProjectSession,
        recent: &mut dyn RecentFiles,
        path: &Path,
    ) -> Result<(), Diagnostic> {
        let document = match self.storage.load_document(path) {
            Ok(document) => document,
            Err(e) => {
                let diagnostic =
                    Diagnostic::from_error(&e, || format!("Could not open {}", path.display()));
                log::error!("Failed to open {}: {}", path.display(), diagnostic.message);
                self.diagnostics
                    .report_error(&diagnostic.title, &diagnostic.message);
                return Err(diagnostic);
            }
        };

        session.replace_document(document);
        log::info!(
            "Opened {} ({} charts)",
            path.display(),
            session.document().charts.len()
        );

        match std::fs::canonicalize(path) {
            Ok(canonical) => recent.record_opened(&canonical),
            Err(e) => log::warn!("Not adding {} to recent files: {}", path.display(), e),
        }
        Ok(())
    }

    /// Save the session's document to its own path.
    pub fn save(&self, session: &ProjectSession) -> Result<(), Diagnostic> {
        let path = &session.document().path;
        match session.save(self.storage.as_ref()) {
            Ok(()) => {
                log::info!("Saved {}", path.display());
                Ok(())
            }
            Err(e) => {
                let diagnostic =
                    Diagnostic::from_error(&e, || format!("Could not save {}", path.display()));
                log::error!("Failed to save {}: {}", path.display(), diagnostic.message);
                self.diagnostics
                    .report_error(&diagnostic.title, &diagnostic.message);
                Err(diagnostic)
            }
        }
    }
}
