mod app;
mod color;
mod config;
mod data;
mod state;
mod ui;

use anyhow::anyhow;
use app::DashboardApp;
use clap::Parser;
use config::Cli;
use eframe::egui;

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let cli = Cli::parse();
    let sources = cli.data_sources();
    log::info!(
        "Data sources: {}, {}, {}",
        sources.market_share.display(),
        sources.plans.display(),
        sources.competitors.display()
    );

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1200.0, 900.0])
            .with_min_inner_size([700.0, 500.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Point32Health Market Intelligence",
        options,
        Box::new(|_cc| Ok(Box::new(DashboardApp::new(sources)))),
    )
    .map_err(|e| anyhow!("dashboard window failed: {e}"))
}
