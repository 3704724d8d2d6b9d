use eframe::egui::{self, Color32, RichText, Ui};

use crate::data::filter::{PayloadRange, SiteSelection, SliderHandle};
use crate::state::AppState;

const HEADING_COLOR: Color32 = Color32::from_rgb(0x50, 0x3D, 0x36);

// ---------------------------------------------------------------------------
// Dashboard controls
// ---------------------------------------------------------------------------

/// Page heading.
pub fn heading(ui: &mut Ui) {
    ui.vertical_centered(|ui: &mut Ui| {
        ui.label(
            RichText::new("SpaceX Launch Records Dashboard")
                .size(40.0)
                .color(HEADING_COLOR),
        );
    });
}

/// Searchable launch-site dropdown: `All Sites` plus each distinct site.
pub fn site_dropdown(ui: &mut Ui, state: &mut AppState) {
    let Some(ds) = &state.dataset else {
        return;
    };
    // Clone what we need so we can mutate state inside the popup.
    let sites = ds.sites.clone();
    let current = state.selection.site.clone();

    egui::ComboBox::from_id_salt("site-dropdown")
        .width(ui.available_width())
        .selected_text(current.to_string())
        .show_ui(ui, |ui: &mut Ui| {
            ui.add(
                egui::TextEdit::singleline(&mut state.site_search)
                    .hint_text("Select a Launch Site here"),
            );
            ui.separator();

            let needle = state.site_search.trim().to_lowercase();
            let mut options = vec![SiteSelection::All];
            options.extend(sites.into_iter().map(SiteSelection::Site));

            for option in options {
                let label = option.to_string();
                if !needle.is_empty() && !label.to_lowercase().contains(&needle) {
                    continue;
                }
                if ui.selectable_label(current == option, label).clicked() {
                    state.select_site(option);
                }
            }
        });
}

/// Payload interval control: two handles bounded by the dataset's payload
/// span, labelled with their end marks.
pub fn payload_slider(ui: &mut Ui, state: &mut AppState) {
    let Some(ds) = &state.dataset else {
        return;
    };
    let (min, max) = (ds.min_payload, ds.max_payload);
    let step = state.slider_step;
    let mut low = state.selection.payload.low();
    let mut high = state.selection.payload.high();

    ui.label("Payload range (Kg):");
    let mut low_changed = false;
    let mut high_changed = false;
    ui.horizontal(|ui: &mut Ui| {
        ui.label(RichText::new(format!("{}", min as i64)).weak());
        low_changed = ui
            .add(egui::Slider::new(&mut low, min..=max).step_by(step).text("from"))
            .changed();
        high_changed = ui
            .add(egui::Slider::new(&mut high, min..=max).step_by(step).text("to"))
            .changed();
        ui.label(RichText::new(format!("{}", max as i64)).weak());
    });

    let moved = if low_changed {
        Some(SliderHandle::Low)
    } else if high_changed {
        Some(SliderHandle::High)
    } else {
        return;
    };
    let range = PayloadRange::from_slider(low, high, moved, min, max, step);
    state.set_payload_range(range.low(), range.high());
}

// ---------------------------------------------------------------------------
// Top bar
// ---------------------------------------------------------------------------

/// Render the top menu / toolbar.
pub fn top_bar(ui: &mut Ui, state: &mut AppState) {
    egui::menu::bar(ui, |ui: &mut Ui| {
        ui.menu_button("File", |ui: &mut Ui| {
            if ui.button("Open…").clicked() {
                open_file_dialog(state);
                ui.close_menu();
            }
        });

        ui.separator();

        if let Some(ds) = &state.dataset {
            ui.label(format!(
                "{} launches ({} successful) from {} sites, {} in payload range",
                ds.len(),
                ds.success_count(),
                ds.sites.len(),
                state.scatter_points.len()
            ));
        }

        if let Some(msg) = &state.status_message {
            ui.separator();
            ui.label(RichText::new(msg).color(Color32::RED));
        }
    });
}

// ---------------------------------------------------------------------------
// File dialog
// ---------------------------------------------------------------------------

pub fn open_file_dialog(state: &mut AppState) {
    let file = rfd::FileDialog::new()
        .set_title("Open launch records")
        .add_filter("Supported files", &["csv", "json", "parquet", "pq"])
        .add_filter("CSV", &["csv"])
        .add_filter("JSON", &["json"])
        .add_filter("Parquet", &["parquet", "pq"])
        .pick_file();

    if let Some(path) = file {
        match crate::data::loader::load_file(&path) {
            Ok(dataset) => {
                log::info!(
                    "Loaded {} launches from sites {:?}",
                    dataset.len(),
                    dataset.sites
                );
                state.set_dataset(dataset);
            }
            Err(e) => {
                log::error!("Failed to load file: {e:#}");
                state.status_message = Some(format!("Error: {e:#}"));
            }
        }
    }
}
