mod app;
mod assistant;
mod command;
mod config;
mod controller;
mod event;
mod logging;
mod model;
mod notify;
mod theme;
mod ui;

use app::BuilderApp;
use assistant::responder::TokioReplyScheduler;
use config::BuilderConfig;
use controller::Controller;
use eframe::egui;
use std::sync::mpsc;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    logging::init();

    let config_path = config::config_path();
    let config = match BuilderConfig::load(&config_path) {
        Ok(config) => config,
        Err(err) => {
            tracing::warn!("{err}; falling back to default configuration");
            BuilderConfig::default()
        }
    };
    tracing::info!(path = %config_path.display(), "configuration resolved");

    let (tx, rx) = mpsc::channel();
    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .thread_name("builderai-runtime")
        .build()?;

    let scheduler = TokioReplyScheduler::new(runtime.handle().clone(), tx);
    let controller = Controller::new(&config, Box::new(scheduler));
    let app = BuilderApp::new(rx, controller, &config);
    let _runtime = runtime;

    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title("BuilderAI")
            .with_inner_size([1440.0, 900.0])
            .with_min_inner_size([1100.0, 680.0]),
        ..Default::default()
    };

    eframe::run_native(
        "BuilderAI",
        native_options,
        Box::new(move |_creation_context| Ok(Box::new(app))),
    )?;

    tracing::info!("BuilderAI shut down");
    Ok(())
}
