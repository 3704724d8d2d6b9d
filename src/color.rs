use std::collections::BTreeMap;

use eframe::egui::Color32;
use palette::{Hsl, IntoColor, Srgb};

// ---------------------------------------------------------------------------
// Color palette generator
// ---------------------------------------------------------------------------

/// Generates `n` visually distinct colours using evenly spaced hues.
pub fn generate_palette(n: usize) -> Vec<Color32> {
    if n == 0 {
        return Vec::new();
    }
    (0..n)
        .map(|i| {
            let hue = (i as f32 / n as f32) * 360.0;
            let hsl = Hsl::new(hue, 0.75, 0.55);
            let rgb: Srgb = hsl.into_color();
            Color32::from_rgb(
                (rgb.red * 255.0) as u8,
                (rgb.green * 255.0) as u8,
                (rgb.blue * 255.0) as u8,
            )
        })
        .collect()
}

// ---------------------------------------------------------------------------
// Color mapping: category label → Color32
// ---------------------------------------------------------------------------

/// Maps category labels (launch sites, or outcome flags) to distinct colours.
#[derive(Debug, Clone)]
pub struct ColorMap {
    mapping: BTreeMap<String, Color32>,
    /// Labels in the order they were given.
    order: Vec<String>,
    default_color: Color32,
}

impl ColorMap {
    /// Build a colour map, assigning palette colours in label order.
    /// Repeated labels keep their first colour.
    pub fn new<S: AsRef<str>>(labels: &[S]) -> Self {
        let mut order: Vec<String> = Vec::new();
        for label in labels {
            let label = label.as_ref();
            if !order.iter().any(|l| l == label) {
                order.push(label.to_string());
            }
        }

        let palette = generate_palette(order.len());
        let mapping: BTreeMap<String, Color32> = order
            .iter()
            .cloned()
            .zip(palette.into_iter())
            .collect();

        ColorMap {
            mapping,
            order,
            default_color: Color32::GRAY,
        }
    }

    /// Look up the colour for a given label.
    pub fn color_for(&self, label: &str) -> Color32 {
        self.mapping
            .get(label)
            .copied()
            .unwrap_or(self.default_color)
    }

    /// Labels in the order they were first given.
    pub fn labels(&self) -> &[String] {
        &self.order
    }
}
