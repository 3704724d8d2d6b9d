use eframe::egui::{self, ScrollArea, Ui};

use crate::data::model::LaunchDataset;
use crate::state::AppState;
use crate::ui::{charts, panels};

// ---------------------------------------------------------------------------
// eframe App implementation
// ---------------------------------------------------------------------------

pub struct LaunchDashApp {
    pub state: AppState,
}

impl LaunchDashApp {
    pub fn new(dataset: LaunchDataset, slider_step: f64) -> Self {
        let mut state = AppState::new(slider_step);
        state.set_dataset(dataset);
        Self { state }
    }
}

impl eframe::App for LaunchDashApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // ---- Top panel: menu bar ----
        egui::TopBottomPanel::top("top_bar").show(ctx, |ui| {
            panels::top_bar(ui, &mut self.state);
        });

        // ---- Central panel: controls and charts, top to bottom ----
        egui::CentralPanel::default().show(ctx, |ui| {
            ScrollArea::vertical()
                .auto_shrink([false, false])
                .show(ui, |ui: &mut Ui| {
                    panels::heading(ui);
                    panels::site_dropdown(ui, &mut self.state);
                    ui.add_space(12.0);

                    charts::success_pie_chart(ui, &self.state);
                    ui.add_space(12.0);

                    panels::payload_slider(ui, &mut self.state);
                    charts::payload_scatter_chart(ui, &self.state);
                });
        });
    }
}
