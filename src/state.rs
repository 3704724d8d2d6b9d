use crate::color::ColorMap;
use crate::data::aggregate::{PieSlice, site_success_counts};
use crate::data::filter::{
    PayloadRange, ScatterPoint, Selection, SiteSelection, payload_success_points,
};
use crate::data::model::{LaunchDataset, Outcome};

// ---------------------------------------------------------------------------
// Application state
// ---------------------------------------------------------------------------

/// The full UI state, independent of rendering.
pub struct AppState {
    /// Loaded dataset.
    pub dataset: Option<LaunchDataset>,

    /// Dropdown and slider values.
    pub selection: Selection,

    /// Pie chart for the current selection (cached).
    pub pie_slices: Vec<PieSlice>,

    /// Scatter plot for the current selection (cached).
    pub scatter_points: Vec<ScatterPoint>,

    /// One colour per launch site, shared by both charts.
    pub site_colors: Option<ColorMap>,

    /// Colours for the failure / success class flags.
    pub outcome_colors: ColorMap,

    /// Text typed into the dropdown's search box.
    pub site_search: String,

    /// Payload slider step in kilograms.
    pub slider_step: f64,

    /// Status / error message shown in the UI.
    pub status_message: Option<String>,
}

impl AppState {
    pub fn new(slider_step: f64) -> Self {
        Self {
            dataset: None,
            selection: Selection {
                site: SiteSelection::All,
                payload: PayloadRange::new(0.0, 0.0),
            },
            pie_slices: Vec::new(),
            scatter_points: Vec::new(),
            site_colors: None,
            outcome_colors: ColorMap::new(&[
                Outcome::Failure.to_string(),
                Outcome::Success.to_string(),
            ]),
            site_search: String::new(),
            slider_step,
            status_message: None,
        }
    }

    /// Ingest a newly loaded dataset and reset the selection to show everything.
    pub fn set_dataset(&mut self, dataset: LaunchDataset) {
        self.selection = Selection::initial(&dataset);
        self.site_colors = Some(ColorMap::new(&dataset.sites));
        self.site_search.clear();
        self.dataset = Some(dataset);
        self.status_message = None;
        self.refresh();
    }

    /// Recompute both charts from the current selection.
    pub fn refresh(&mut self) {
        let Some(ds) = &self.dataset else {
            self.pie_slices.clear();
            self.scatter_points.clear();
            return;
        };
        self.pie_slices = site_success_counts(ds, &self.selection.site);
        self.scatter_points =
            payload_success_points(ds, &self.selection.site, self.selection.payload);
    }

    /// Change the dropdown value.
    pub fn select_site(&mut self, site: SiteSelection) {
        if self.selection.site == site {
            return;
        }
        log::debug!("Selected site: {site}");
        self.selection.site = site;
        self.refresh();
    }

    /// Change the slider value. Ends are reordered and kept inside the dataset's
    /// payload bounds.
    pub fn set_payload_range(&mut self, a: f64, b: f64) {
        let mut range = PayloadRange::new(a, b);
        if let Some(ds) = &self.dataset {
            range = range.clamped(ds.min_payload, ds.max_payload);
        }
        if range == self.selection.payload {
            return;
        }
        log::debug!("Payload range: {} – {} kg", range.low(), range.high());
        self.selection.payload = range;
        self.refresh();
    }

    /// Colour for a pie label or scatter colour key under the current selection:
    /// site colours for `All`, outcome colours for a single site.
    pub fn category_color(&self, key: &str) -> eframe::egui::Color32 {
        match (&self.selection.site, &self.site_colors) {
            (SiteSelection::All, Some(cm)) => cm.color_for(key),
            _ => self.outcome_colors.color_for(key),
        }
    }
}
