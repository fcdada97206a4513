// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Main application state and egui App implementation.
//!
//! This module ties the editing session, the open/save logic and the
//! persisted settings to the egui windows that display them.

use crate::io::settings::Settings;
use crate::loader::SessionLoader;
use crate::models::session::ProjectSession;
use crate::ui::{menu, properties, status, timeline};
use std::path::PathBuf;

/// Jacket texture along with the slot generation it was built from.
struct JacketTexture {
    generation: u64,
    texture: Option<egui::TextureHandle>,
}

/// Main application state.
pub struct FumenEditorApp {
    session: ProjectSession,
    loader: SessionLoader,
    settings: Settings,
    /// Where settings are persisted, if anywhere.
    settings_path: Option<PathBuf>,
    jacket: Option<JacketTexture>,
    /// Last title sent to the viewport.
    title: String,
}

impl FumenEditorApp {
    pub fn new(
        session: ProjectSession,
        loader: SessionLoader,
        settings: Settings,
        settings_path: Option<PathBuf>,
    ) -> Self {
        Self {
            session,
            loader,
            settings,
            settings_path,
            jacket: None,
            title: String::new(),
        }
    }

    /// Open a file, prompting for it when `path` is `None`.
    fn open(&mut self, path: Option<PathBuf>) {
        let result = match path {
            Some(path) => self
                .loader
                .open_file(&mut self.session, &mut self.settings, &path),
            None => self.loader.open(&mut self.session, &mut self.settings),
        };
        if result.is_ok() {
            self.persist_settings();
        }
    }

    fn save(&self) {
        // Failures are shown to the user by the loader.
        match self.loader.save(&self.session) {
            Ok(()) => log::info!("Saved from menu"),
            Err(e) => log::debug!("Save not completed: {}", e),
        }
    }

    fn persist_settings(&self) {
        if let Some(ref path) = self.settings_path {
            if let Err(e) = self.settings.save(path) {
                log::warn!("Failed to save settings: {:#}", e);
            }
        }
    }

    /// Rebuild the jacket texture when the jacket slot changed.
    fn sync_jacket_texture(&mut self, ctx: &egui::Context) {
        let generation = self.session.jacket().generation();
        if self.jacket.as_ref().map(|j| j.generation) == Some(generation) {
            return;
        }
        let texture = self.session.jacket().get().map(|jacket| {
            let size = [jacket.width as usize, jacket.height as usize];
            let image = egui::ColorImage::from_rgba_unmultiplied(size, &jacket.pixels);
            ctx.load_texture("jacket", image, egui::TextureOptions::LINEAR)
        });
        self.jacket = Some(JacketTexture {
            generation,
            texture,
        });
    }

    fn window_title(&self) -> String {
        let document = self.session.document();
        let name = document
            .path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        if document.title.is_empty() {
            format!("{} - Fumen Editor", name)
        } else {
            format!("{} ({}) - Fumen Editor", document.title, name)
        }
    }
}

impl eframe::App for FumenEditorApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Keyboard shortcuts
        if ctx.input(|i| i.modifiers.command && i.key_pressed(egui::Key::O)) {
            self.open(None);
        }
        if ctx.input(|i| i.modifiers.command && i.key_pressed(egui::Key::S)) {
            FumenEditorApp::save(self);
        }

        // Menu bar
        let panels_before = self.settings.panels;
        let menu_action = egui::TopBottomPanel::top("menu_bar")
            .show(ctx, |ui| {
                menu::show(ui, &self.settings.recent_files, &mut self.settings.panels)
            })
            .inner;

        match menu_action {
            menu::MenuAction::Open => self.open(None),
            menu::MenuAction::OpenRecent(path) => self.open(Some(path)),
            menu::MenuAction::Save => FumenEditorApp::save(self),
            menu::MenuAction::Quit => ctx.send_viewport_cmd(egui::ViewportCommand::Close),
            menu::MenuAction::None => {}
        }

        let title = self.window_title();
        if title != self.title {
            ctx.send_viewport_cmd(egui::ViewportCommand::Title(title.clone()));
            self.title = title;
        }

        // Timeline goes first so the side panel is laid out before the windows
        if self.settings.panels.timeline {
            timeline::show_timeline(ctx, &mut self.session.playback());
        }

        egui::CentralPanel::default().show(ctx, |_ui| {});

        if self.settings.panels.properties {
            self.sync_jacket_texture(ctx);
            let texture = self.jacket.as_ref().and_then(|j| j.texture.as_ref());
            properties::show(
                ctx,
                &mut self.settings.panels.properties,
                &mut self.session,
                texture,
            );
        }

        if self.settings.panels.status {
            let lines = self.session.status_lines();
            status::show(ctx, &mut self.settings.panels.status, &lines);
        }

        if self.settings.panels.playback_status {
            timeline::show_playback_status(ctx, &self.session.playback());
        }

        if self.settings.panels != panels_before {
            self.persist_settings();
        }
    }
}
