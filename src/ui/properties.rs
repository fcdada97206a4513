// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Fumen properties window.
//!
//! Shows the jacket next to editable metadata. Editing the music or
//! jacket path reloads the matching resource immediately.

use crate::models::session::ProjectSession;
use std::path::Path;

const JACKET_SIZE: f32 = 200.0;

/// Display the properties window.
pub fn show(
    ctx: &egui::Context,
    open: &mut bool,
    session: &mut ProjectSession,
    jacket_texture: Option<&egui::TextureHandle>,
) {
    egui::Window::new("Properties")
        .open(open)
        .resizable(false)
        .default_width(500.0)
        .show(ctx, |ui| {
            ui.horizontal_top(|ui| {
                match jacket_texture {
                    Some(texture) => {
                        ui.add(
                            egui::Image::new(egui::load::SizedTexture::from_handle(texture))
                                .fit_to_exact_size(egui::vec2(JACKET_SIZE, JACKET_SIZE)),
                        );
                    }
                    None => {
                        egui::Frame::group(ui.style()).show(ui, |ui| {
                            ui.allocate_space(egui::vec2(JACKET_SIZE, JACKET_SIZE));
                        });
                    }
                }

                ui.vertical(|ui| {
                    egui::Grid::new("properties_grid")
                        .num_columns(2)
                        .spacing([8.0, 6.0])
                        .show(ui, |ui| {
                            ui.label("Title");
                            ui.text_edit_singleline(session.title_mut());
                            ui.end_row();

                            ui.label("Artist");
                            ui.text_edit_singleline(session.artist_mut());
                            ui.end_row();

                            ui.label("Music");
                            let mut music = session.document().music_path.clone();
                            let field = ui.text_edit_singleline(&mut music);
                            let field = hover_resolved(field, session.music().attempted_path());
                            if field.changed() {
                                session.on_audio_path_edited(music);
                            }
                            ui.end_row();

                            ui.label("Jacket");
                            let mut jacket = session.document().jacket_path.clone();
                            let field = ui.text_edit_singleline(&mut jacket);
                            let field = hover_resolved(field, session.jacket().attempted_path());
                            if field.changed() {
                                session.on_image_path_edited(jacket);
                            }
                            ui.end_row();
                        });

                    ui.separator();
                    chart_selector(ui, session);
                });
            });
        });
}

/// Show where a path field was resolved to.
fn hover_resolved(field: egui::Response, resolved: Option<&Path>) -> egui::Response {
    match resolved {
        Some(path) => field.on_hover_text(path.display().to_string()),
        None => field,
    }
}

fn chart_selector(ui: &mut egui::Ui, session: &mut ProjectSession) {
    if session.document().charts.is_empty() {
        ui.label(egui::RichText::new("No charts").italics().weak());
        return;
    }

    let ids: Vec<String> = session.document().charts.keys().map(str::to_owned).collect();
    let selected = session.selected_chart().unwrap_or("").to_owned();
    egui::ComboBox::from_label("Chart")
        .selected_text(selected.as_str())
        .show_ui(ui, |ui| {
            for id in &ids {
                if ui.selectable_label(*id == selected, id.as_str()).clicked() {
                    session.select_chart(id);
                }
            }
        });

    if let Some(chart) = session
        .selected_chart()
        .and_then(|id| session.document().charts.get(id))
    {
        ui.label(format!(
            "Level {}  ·  {} notes  ·  resolution {}",
            chart.level,
            chart.notes.len(),
            chart.resolution
        ));
    }
}
