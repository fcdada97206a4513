// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Main menu bar.
//!
//! File operations and window toggles. The menu only reports what was
//! clicked; the app performs the action.

use crate::io::settings::PanelVisibility;
use std::path::{Path, PathBuf};

/// Result of menu interaction.
pub enum MenuAction {
    None,
    Open,
    OpenRecent(PathBuf),
    Save,
    Quit,
}

/// Display the menu bar.
pub fn show(ui: &mut egui::Ui, recent_files: &[PathBuf], panels: &mut PanelVisibility) -> MenuAction {
    let mut action = MenuAction::None;

    egui::menu::bar(ui, |ui| {
        ui.menu_button("File", |ui| {
            if ui.button("Open... (Ctrl+O)").clicked() {
                action = MenuAction::Open;
                ui.close_menu();
            }
            ui.add_enabled_ui(!recent_files.is_empty(), |ui| {
                ui.menu_button("Open Recent", |ui| {
                    for path in recent_files {
                        if ui.button(recent_label(path)).on_hover_text(path.display().to_string()).clicked() {
                            action = MenuAction::OpenRecent(path.clone());
                            ui.close_menu();
                        }
                    }
                });
            });
            if ui.button("Save (Ctrl+S)").clicked() {
                action = MenuAction::Save;
                ui.close_menu();
            }
            ui.separator();
            if ui.button("Quit").clicked() {
                action = MenuAction::Quit;
                ui.close_menu();
            }
        });

        ui.menu_button("View", |ui| {
            ui.checkbox(&mut panels.properties, "Properties");
            ui.checkbox(&mut panels.status, "Status");
            ui.checkbox(&mut panels.playback_status, "Playback Status");
            ui.checkbox(&mut panels.timeline, "Timeline");
        });
    });

    action
}

fn recent_label(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}
