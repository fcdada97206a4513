// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Fumen Editor
//!
//! A desktop editor for memon rhythm-game charts. Pass a memon file as
//! the first argument to open it on startup.

mod app;
mod io;
mod loader;
mod models;
mod ui;
mod util;

use anyhow::Result;
use app::FumenEditorApp;
use io::media::{JacketDecoder, MusicDecoder};
use io::memon::MemonStorage;
use io::settings::Settings;
use loader::SessionLoader;
use models::fumen::ProjectDocument;
use models::session::{Decoders, ProjectSession};
use ui::dialogs::{MessageBoxDiagnostics, NativeFileDialog};

fn main() -> Result<()> {
    // Initialize logging
    env_logger::init();

    let settings_path = Settings::default_path();
    let mut settings = Settings::load_or_default(settings_path.as_deref());

    let untitled = util::paths::absolutize(std::path::Path::new("untitled.memon"));
    let decoders = Decoders {
        music: Box::new(MusicDecoder),
        jacket: Box::new(JacketDecoder),
    };
    let mut session = ProjectSession::new(ProjectDocument::new(untitled), decoders);
    let loader = SessionLoader::new(
        Box::new(MemonStorage),
        Box::new(NativeFileDialog),
        Box::new(MessageBoxDiagnostics),
    );

    if let Some(path) = std::env::args_os().nth(1) {
        let path = std::path::PathBuf::from(path);
        if loader.open_file(&mut session, &mut settings, &path).is_ok() {
            if let Some(ref settings_path) = settings_path {
                if let Err(e) = settings.save(settings_path) {
                    log::warn!("Failed to save settings: {:#}", e);
                }
            }
        }
    }

    // Configure egui options
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1280.0, 720.0])
            .with_min_inner_size([800.0, 600.0])
            .with_title("Fumen Editor"),
        ..Default::default()
    };

    // Run the application
    let app = FumenEditorApp::new(session, loader, settings, settings_path);
    eframe::run_native(
        "Fumen Editor",
        options,
        Box::new(|_cc| Ok(Box::new(app))),
    )
    .map_err(|e| anyhow::anyhow!("Application error: {}", e))?;

    Ok(())
}
