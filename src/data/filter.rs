use std::fmt;

use super::model::{LaunchDataset, Outcome};

// ---------------------------------------------------------------------------
// Selection state: which site and which payload interval
// ---------------------------------------------------------------------------

/// Dropdown selection: every site, or a single launch pad.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum SiteSelection {
    #[default]
    All,
    Site(String),
}

impl SiteSelection {
    /// Whether a record at `site` passes this selection.
    pub fn matches(&self, site: &str) -> bool {
        match self {
            SiteSelection::All => true,
            SiteSelection::Site(selected) => selected == site,
        }
    }
}

impl fmt::Display for SiteSelection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SiteSelection::All => write!(f, "All Sites"),
            SiteSelection::Site(site) => write!(f, "{site}"),
        }
    }
}

/// Inclusive payload mass interval in kilograms. Always `low <= high`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PayloadRange {
    low: f64,
    high: f64,
}

impl PayloadRange {
    /// Build a range from two ends given in either order.
    pub fn new(a: f64, b: f64) -> Self {
        if a <= b {
            PayloadRange { low: a, high: b }
        } else {
            PayloadRange { low: b, high: a }
        }
    }

    /// The full payload span of a dataset, the slider's initial value.
    pub fn full(dataset: &LaunchDataset) -> Self {
        PayloadRange::new(dataset.min_payload, dataset.max_payload)
    }

    pub fn low(&self) -> f64 {
        self.low
    }

    pub fn high(&self) -> f64 {
        self.high
    }

    pub fn contains(&self, payload_mass_kg: f64) -> bool {
        self.low <= payload_mass_kg && payload_mass_kg <= self.high
    }

    /// Restrict both ends to `[min, max]`.
    pub fn clamped(self, min: f64, max: f64) -> Self {
        PayloadRange::new(self.low.clamp(min, max), self.high.clamp(min, max))
    }

    /// Turn raw slider handle values into a range over `[min, max]`.
    ///
    /// A stepped slider only lands on `min + k * step`; a value within half a
    /// step of either bound snaps to that bound. Moving one handle past the
    /// other pushes the other one along.
    pub fn from_slider(
        low: f64,
        high: f64,
        moved: Option<SliderHandle>,
        min: f64,
        max: f64,
        step: f64,
    ) -> Self {
        let snap = |v: f64| {
            let v = v.clamp(min, max);
            if v >= max - step / 2.0 {
                max
            } else if v <= min + step / 2.0 {
                min
            } else {
                v
            }
        };
        let (mut low, mut high) = (snap(low), snap(high));

        match moved {
            Some(SliderHandle::Low) => high = high.max(low),
            Some(SliderHandle::High) => low = low.min(high),
            None => {}
        }
        PayloadRange::new(low, high)
    }
}

/// Which end of the payload range control the user moved.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SliderHandle {
    Low,
    High,
}

/// Everything the user has chosen on the dashboard.
#[derive(Debug, Clone, PartialEq)]
pub struct Selection {
    pub site: SiteSelection,
    pub payload: PayloadRange,
}

impl Selection {
    /// `ALL` sites over the whole payload span.
    pub fn initial(dataset: &LaunchDataset) -> Self {
        Selection {
            site: SiteSelection::All,
            payload: PayloadRange::full(dataset),
        }
    }
}

// ---------------------------------------------------------------------------
// Payload / success scatter series
// ---------------------------------------------------------------------------

/// One point of the payload vs. success scatter plot.
#[derive(Debug, Clone, PartialEq)]
pub struct ScatterPoint {
    pub site: String,
    pub payload_mass_kg: f64,
    pub outcome: Outcome,
    /// Category used for colouring: the site for `All`, the outcome otherwise.
    pub color_key: String,
}

/// Launches whose payload lies in `range` (inclusive), restricted to `site`.
///
/// With [`SiteSelection::All`] points are keyed by site so each pad gets its
/// own colour; for a single site they are keyed by outcome instead.
/// Dataset order is preserved.
pub fn payload_success_points(
    dataset: &LaunchDataset,
    site: &SiteSelection,
    range: PayloadRange,
) -> Vec<ScatterPoint> {
    dataset
        .records
        .iter()
        .filter(|r| range.contains(r.payload_mass_kg))
        .filter(|r| site.matches(&r.site))
        .map(|r| {
            let color_key = match site {
                SiteSelection::All => r.site.clone(),
                SiteSelection::Site(_) => r.outcome.to_string(),
            };
            ScatterPoint {
                site: r.site.clone(),
                payload_mass_kg: r.payload_mass_kg,
                outcome: r.outcome,
                color_key,
            }
        })
        .collect()
}

/// Title shown above the scatter plot.
pub fn scatter_title(site: &SiteSelection) -> String {
    match site {
        SiteSelection::All => "Payload vs. Success for All Sites".to_string(),
        SiteSelection::Site(s) => format!("Payload vs. Success at {s}"),
    }
}
