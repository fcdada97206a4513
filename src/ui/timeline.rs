// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Playback read-out and timeline scrubber.
//!
//! The scrubber is a vertical slider along the right edge of the window,
//! with the start of the track at the top.

use crate::models::playback::PlaybackBridge;

const TIME_LABEL_COLOR: egui::Color32 = egui::Color32::from_gray(135);

/// Display the current playing time at the bottom of the window.
pub fn show_playback_status(ctx: &egui::Context, bridge: &PlaybackBridge<'_>) {
    let Some(timecode) = bridge.formatted_timecode() else {
        return;
    };
    egui::Area::new(egui::Id::new("playback_status"))
        .anchor(egui::Align2::CENTER_BOTTOM, [0.0, -15.0])
        .interactable(false)
        .show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.colored_label(TIME_LABEL_COLOR, "Time : ");
                ui.label(timecode.to_string());
            });
        });
}

/// Display the timeline scrubber and apply any seek made with it.
///
/// Nothing is shown while no music is loaded.
pub fn show_timeline(ctx: &egui::Context, bridge: &mut PlaybackBridge<'_>) {
    if !bridge.is_available() {
        return;
    }
    egui::SidePanel::right("timeline")
        .exact_width(24.0)
        .resizable(false)
        .show_separator_line(false)
        .show(ctx, |ui| {
            let Some(mut value) = bridge.current_seek_value() else {
                return;
            };
            ui.spacing_mut().slider_width = ui.available_height() * 0.9;
            let slider = egui::Slider::new(&mut value, 0.0..=1.0)
                .vertical()
                .show_value(false);
            if ui.add(slider).changed() {
                bridge.seek_to(value);
            }
        });
}
