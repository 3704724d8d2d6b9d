use std::path::PathBuf;

/// Dataset read at startup. Other files are opened from the File menu.
pub const DEFAULT_DATA_FILE: &str = "spacex_launch_dash.csv";

/// Startup settings for the dashboard window.
#[derive(Debug, Clone, PartialEq)]
pub struct DashboardConfig {
    pub data_path: PathBuf,
    pub window_size: [f32; 2],
    pub min_window_size: [f32; 2],
    /// Payload slider step in kilograms.
    pub slider_step: f64,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            data_path: PathBuf::from(DEFAULT_DATA_FILE),
            window_size: [1000.0, 900.0],
            min_window_size: [600.0, 400.0],
            slider_step: 1000.0,
        }
    }
}
