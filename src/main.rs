mod app;
mod color;
mod config;
mod data;
mod state;
mod ui;

use anyhow::Context;
use app::MedalBoardApp;
use clap::Parser;
use config::Config;
use eframe::egui;
use state::AppState;

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let config = Config::parse();

    // Both tables must load before a window opens.
    let dataset =
        data::loader::load_dataset(&config.medals, &config.competitions, config.strict_totals)
            .context("loading Olympics datasets")?;

    let logo = if config.logo.is_file() {
        Some(config.logo.clone())
    } else {
        log::warn!(
            "Logo {} not found, sidebar will have no image",
            config.logo.display()
        );
        None
    };
    let state = AppState::new(dataset, logo);

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1200.0, 900.0])
            .with_min_inner_size([700.0, 500.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Olympics 2024 Medal Analysis",
        options,
        Box::new(|cc| {
            // Install image loaders so egui can render the sidebar logo.
            egui_extras::install_image_loaders(&cc.egui_ctx);
            Ok(Box::new(MedalBoardApp::new(state)))
        }),
    )
    .map_err(|e| anyhow::anyhow!("running dashboard: {e}"))
}
