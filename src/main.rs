mod app;
mod color;
mod config;
mod data;
mod state;
mod ui;

use app::LaunchDashApp;
use config::DashboardConfig;
use eframe::egui;

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let config = DashboardConfig::default();

    // The dashboard has nothing to show without its dataset.
    let dataset = match data::loader::load_file(&config.data_path) {
        Ok(ds) => ds,
        Err(e) => {
            log::error!("Failed to load dataset: {e:#}");
            return Err(e);
        }
    };
    log::info!(
        "Loaded {} launches from {} sites, payload {}–{} kg",
        dataset.len(),
        dataset.sites.len(),
        dataset.min_payload,
        dataset.max_payload
    );

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size(config.window_size)
            .with_min_inner_size(config.min_window_size),
        ..Default::default()
    };

    let slider_step = config.slider_step;
    eframe::run_native(
        "SpaceX Launch Records Dashboard",
        options,
        Box::new(move |_cc| Ok(Box::new(LaunchDashApp::new(dataset, slider_step)))),
    )
    .map_err(|e| anyhow::anyhow!("running dashboard window: {e}"))
}
