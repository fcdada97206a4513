// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Editor status window.

const WARNING_COLOR: egui::Color32 = egui::Color32::from_rgb(255, 107, 105);

/// Display status lines that help the user troubleshoot the editor.
pub fn show(ctx: &egui::Context, open: &mut bool, lines: &[String]) {
    egui::Window::new("Status").open(open).show(ctx, |ui| {
        for line in lines {
            ui.colored_label(WARNING_COLOR, line);
        }
    });
}
