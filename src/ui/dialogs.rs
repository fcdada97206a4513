// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Native dialogs (rusty file dialogs).

use crate::loader::{Diagnostics, FileDialog};
use std::path::PathBuf;

/// Native "open file" dialog filtered to memon files.
#[derive(Debug, Default, Clone, Copy)]
pub struct NativeFileDialog;

impl FileDialog for NativeFileDialog {
    fn choose_file_to_open(&self) -> Option<PathBuf> {
        rfd::FileDialog::new()
            .set_title("Open File")
            .add_filter("Memon", &["memon", "json"])
            .add_filter("All files", &["*"])
            .pick_file()
    }
}

/// Modal error message box.
#[derive(Debug, Default, Clone, Copy)]
pub struct MessageBoxDiagnostics;

impl Diagnostics for MessageBoxDiagnostics {
    fn report_error(&self, title: &str, message: &str) {
        rfd::MessageDialog::new()
            .set_level(rfd::MessageLevel::Error)
            .set_title(title)
            .set_description(message)
            .set_buttons(rfd::MessageButtons::Ok)
            .show();
    }
}
