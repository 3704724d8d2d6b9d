use thiserror::Error;

/// Structural problems in a launch records file.
///
/// IO and parse failures are reported through `anyhow` context by the loader;
/// these variants cover data that parsed but does not describe a valid launch.
#[derive(Error, Debug)]
pub enum DatasetError {
    #[error("missing required column '{0}'")]
    MissingColumn(&'static str),

    #[error("row {row}: launch site is empty")]
    MissingSite { row: usize },

    #[error("row {row}: payload mass {value} is not a non-negative number")]
    InvalidPayload { row: usize, value: f64 },

    #[error("row {row}: class flag {value} is not 0 or 1")]
    InvalidClass { row: usize, value: i64 },

    #[error("row {row}: class flag {value} is not an integer")]
    NonIntegralClass { row: usize, value: f64 },

    #[error("dataset contains no launch records")]
    Empty,
}
