use std::f64::consts::{FRAC_PI_2, TAU};

use eframe::egui::{Color32, RichText, Stroke, Ui};
use egui_plot::{Legend, Plot, PlotPoint, PlotPoints, Points, Polygon, Text};

use crate::data::aggregate::pie_title;
use crate::data::filter::{SiteSelection, scatter_title};
use crate::state::AppState;

const CHART_HEIGHT: f32 = 340.0;

/// Largest arc drawn as a single polygon; egui fills convex shapes only.
const MAX_WEDGE_ANGLE: f64 = TAU / 12.0;

// ---------------------------------------------------------------------------
// Pie chart: successful launches
// ---------------------------------------------------------------------------

/// Render the success pie chart for the current selection.
pub fn success_pie_chart(ui: &mut Ui, state: &AppState) {
    ui.vertical_centered(|ui: &mut Ui| {
        ui.strong(pie_title(&state.selection.site));
    });

    let total: usize = state.pie_slices.iter().map(|s| s.count).sum();
    if total == 0 {
        empty_chart(ui, empty_pie_message(&state.selection.site));
        return;
    }

    Plot::new("success_pie_chart")
        .legend(Legend::default())
        .height(CHART_HEIGHT)
        .data_aspect(1.0)
        .show_axes(false)
        .show_grid(false)
        .show_x(false)
        .show_y(false)
        .allow_drag(false)
        .allow_zoom(false)
        .allow_scroll(false)
        .allow_boxed_zoom(false)
        .include_x(-1.1)
        .include_x(1.1)
        .include_y(-1.1)
        .include_y(1.1)
        .show(ui, |plot_ui| {
            // Slices run clockwise from twelve o'clock.
            let mut start = FRAC_PI_2;
            for slice in &state.pie_slices {
                let sweep = slice.fraction * TAU;
                let color = state.category_color(&slice.label);

                if sweep > 0.0 {
                    for points in wedge_polygons(start, start - sweep) {
                        plot_ui.polygon(
                            Polygon::new(points)
                                .name(&slice.label)
                                .fill_color(color)
                                .stroke(Stroke::new(0.5, color)),
                        );
                    }

                    let mid = start - sweep / 2.0;
                    plot_ui.text(
                        Text::new(
                            PlotPoint::new(0.65 * mid.cos(), 0.65 * mid.sin()),
                            RichText::new(format!("{:.1}%", slice.fraction * 100.0))
                                .color(Color32::WHITE)
                                .strong(),
                        ),
                    );
                } else {
                    // Keep zero slices in the legend.
                    plot_ui.polygon(
                        Polygon::new(PlotPoints::new(vec![[0.0, 0.0]]))
                            .name(&slice.label)
                            .fill_color(color),
                    );
                }

                start -= sweep;
            }
        });
}

/// Placeholder for a pie with nothing to draw. Under `All` the slices count
/// successes, so an all-failure dataset still has launches.
fn empty_pie_message(site: &SiteSelection) -> &'static str {
    match site {
        SiteSelection::All => "No successful launches",
        SiteSelection::Site(_) => "No launches at this site",
    }
}

/// Split the arc from `from` to `to` (radians, `to < from`) into convex wedges,
/// each starting at the centre.
fn wedge_polygons(from: f64, to: f64) -> Vec<PlotPoints<'static>> {
    let sweep = from - to;
    let pieces = (sweep / MAX_WEDGE_ANGLE - 1e-9).ceil().max(1.0) as usize;
    let step = sweep / pieces as f64;

    (0..pieces)
        .map(|i| {
            let a0 = from - step * i as f64;
            let a1 = a0 - step;
            let segments = 8;
            let mut pts = Vec::with_capacity(segments + 2);
            pts.push([0.0, 0.0]);
            for k in 0..=segments {
                let a = a0 - (a0 - a1) * k as f64 / segments as f64;
                pts.push([a.cos(), a.sin()]);
            }
            PlotPoints::new(pts)
        })
        .collect()
}

// ---------------------------------------------------------------------------
// Scatter plot: payload vs. success
// ---------------------------------------------------------------------------

/// Render the payload vs. class scatter plot for the current selection.
pub fn payload_scatter_chart(ui: &mut Ui, state: &AppState) {
    ui.vertical_centered(|ui: &mut Ui| {
        ui.strong(scatter_title(&state.selection.site));
    });

    if state.scatter_points.is_empty() {
        empty_chart(ui, "No launches in the selected payload range");
        return;
    }

    // One series per colour key, in legend order.
    let keys: Vec<String> = match (&state.selection.site, &state.site_colors) {
        (SiteSelection::All, Some(cm)) => cm.labels().to_vec(),
        _ => state.outcome_colors.labels().to_vec(),
    };

    Plot::new("success_payload_scatter_chart")
        .legend(Legend::default())
        .height(CHART_HEIGHT)
        .x_axis_label("Payload Mass (kg)")
        .y_axis_label("class")
        .include_y(-0.25)
        .include_y(1.25)
        .allow_boxed_zoom(true)
        .allow_drag(true)
        .allow_scroll(true)
        .allow_zoom(true)
        .show(ui, |plot_ui| {
            for key in &keys {
                let points: PlotPoints = state
                    .scatter_points
                    .iter()
                    .filter(|p| &p.color_key == key)
                    .map(|p| [p.payload_mass_kg, p.outcome.class() as f64])
                    .collect();
                if points.points().is_empty() {
                    continue;
                }

                plot_ui.points(
                    Points::new(points)
                        .name(key)
                        .color(state.category_color(key))
                        .filled(true)
                        .radius(4.0),
                );
            }
        });
}

fn empty_chart(ui: &mut Ui, message: &str) {
    ui.allocate_ui(eframe::egui::vec2(ui.available_width(), CHART_HEIGHT), |ui: &mut Ui| {
        ui.centered_and_justified(|ui: &mut Ui| {
            ui.label(RichText::new(message).italics());
        });
    });
}
