//! Application entry point: Korean ↔ Vietnamese tutor.
//!
//! # Startup sequence
//!
//! 1. Initialise logging.
//! 2. Load [`AppConfig`] from disk (returns default on first run).
//! 3. Create the [`tokio`] runtime.
//! 4. Build the language service ([`ApiClient`]) from config.
//! 5. Create session channels (`command`, `event`).
//! 6. Spawn the session orchestrator on the tokio runtime.
//! 7. Run [`eframe::run_native`]; blocks the main thread until the window
//!    is closed.

use std::sync::Arc;

use eframe::egui;
use tokio::sync::mpsc;

use ko_vi_tutor::{
    app::TutorApp,
    config::AppConfig,
    fonts,
    llm::{ApiClient, LanguageService},
    pipeline::{Dispatcher, SessionCommand, SessionEvent, SessionOrchestrator},
};

// ---------------------------------------------------------------------------
// Native options builder
// ---------------------------------------------------------------------------

fn native_options(config: &AppConfig) -> eframe::NativeOptions {
    let (w, h) = config.ui.window_size;
    let vp = egui::ViewportBuilder::default()
        .with_title("Ko ↔ Vi Tutor")
        .with_inner_size([w, h])
        .with_min_inner_size([420.0, 360.0]);

    eframe::NativeOptions {
        viewport: vp,
        ..Default::default()
    }
}

// ---------------------------------------------------------------------------
// main
// ---------------------------------------------------------------------------

fn main() -> eframe::Result<()> {
    // 1. Logging
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    log::info!("Ko-Vi tutor starting up");

    // 2. Configuration
    let config = AppConfig::load().unwrap_or_else(|e| {
        log::warn!("Failed to load config ({e}); using defaults");
        AppConfig::default()
    });
    log::info!("completion endpoint {} (model {})", config.llm.base_url, config.llm.model);

    // 3. Tokio runtime; one worker is plenty for one sequential session.
    let rt = match tokio::runtime::Builder::new_multi_thread()
        .worker_threads(1)
        .enable_all()
        .build()
    {
        Ok(rt) => rt,
        Err(e) => {
            log::error!("failed to create tokio runtime: {e}");
            return Err(eframe::Error::AppCreation(Box::new(e)));
        }
    };

    // 4. Language service
    let service: Arc<dyn LanguageService> = Arc::new(ApiClient::from_config(&config.llm));
    let dispatcher = Dispatcher::new(service, config.export.resolve_dir());

    // 5. Channel setup
    let (command_tx, command_rx) = mpsc::channel::<SessionCommand>(16);
    let (event_tx, event_rx) = mpsc::channel::<SessionEvent>(32);

    // 6. Session orchestrator
    rt.spawn(SessionOrchestrator::new(dispatcher).run(command_rx, event_tx));

    // 7. Build the egui app and run it (blocks until the window is closed)
    let options = native_options(&config);
    let result = eframe::run_native(
        "Ko-Vi Tutor",
        options,
        Box::new(move |cc| {
            fonts::install(&cc.egui_ctx, &config.ui);
            if config.ui.dark_mode {
                cc.egui_ctx.set_visuals(egui::Visuals::dark());
            } else {
                cc.egui_ctx.set_visuals(egui::Visuals::light());
            }
            Ok(Box::new(TutorApp::new(command_tx, event_rx, config)))
        }),
    );

    // Closing the command channel (dropped with the app) ends the orchestrator.
    rt.shutdown_timeout(std::time::Duration::from_secs(1));
    result
}
