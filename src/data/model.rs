use std::fmt;

use super::error::DatasetError;

// ---------------------------------------------------------------------------
// Outcome – the binary `class` column
// ---------------------------------------------------------------------------

/// Landing outcome of a launch, stored in the source data as a 0/1 class flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Outcome {
    Failure,
    Success,
}

impl Outcome {
    /// Interpret a raw class flag. Only 0 and 1 are valid.
    pub fn from_class(flag: i64) -> Option<Self> {
        match flag {
            0 => Some(Outcome::Failure),
            1 => Some(Outcome::Success),
            _ => None,
        }
    }

    /// The class flag as stored in the dataset.
    pub fn class(self) -> u8 {
        match self {
            Outcome::Failure => 0,
            Outcome::Success => 1,
        }
    }

    pub fn is_success(self) -> bool {
        self == Outcome::Success
    }
}

/// Outcomes are labelled by their class flag, the way the dataset names them.
impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.class())
    }
}

// ---------------------------------------------------------------------------
// LaunchRecord – one row of the table
// ---------------------------------------------------------------------------

/// A single launch attempt.
#[derive(Debug, Clone, PartialEq)]
pub struct LaunchRecord {
    /// Launch pad label, e.g. `CCAFS LC-40`.
    pub site: String,
    /// Payload mass in kilograms.
    pub payload_mass_kg: f64,
    pub outcome: Outcome,
}

impl LaunchRecord {
    /// Build a record, validating the raw column values of row `row`.
    pub fn from_raw(row: usize, site: &str, payload_mass_kg: f64, class: i64) -> Result<Self, DatasetError> {
        let site = site.trim();
        if site.is_empty() {
            return Err(DatasetError::MissingSite { row });
        }
        if !payload_mass_kg.is_finite() || payload_mass_kg < 0.0 {
            return Err(DatasetError::InvalidPayload {
                row,
                value: payload_mass_kg,
            });
        }
        let outcome = Outcome::from_class(class).ok_or(DatasetError::InvalidClass { row, value: class })?;

        Ok(LaunchRecord {
            site: site.to_string(),
            payload_mass_kg,
            outcome,
        })
    }
}

// ---------------------------------------------------------------------------
// LaunchDataset – the complete loaded table plus its view model
// ---------------------------------------------------------------------------

/// The full parsed dataset with pre-computed slider bounds and site list.
#[derive(Debug, Clone)]
pub struct LaunchDataset {
    /// All launches, in file order.
    pub records: Vec<LaunchRecord>,
    /// Distinct site labels in order of first appearance.
    pub sites: Vec<String>,
    pub min_payload: f64,
    pub max_payload: f64,
}

impl LaunchDataset {
    /// Build the view model from the loaded records.
    pub fn from_records(records: Vec<LaunchRecord>) -> Result<Self, DatasetError> {
        if records.is_empty() {
            return Err(DatasetError::Empty);
        }

        let mut sites: Vec<String> = Vec::new();
        let mut min_payload = f64::INFINITY;
        let mut max_payload = f64::NEG_INFINITY;

        for rec in &records {
            if !sites.contains(&rec.site) {
                sites.push(rec.site.clone());
            }
            min_payload = min_payload.min(rec.payload_mass_kg);
            max_payload = max_payload.max(rec.payload_mass_kg);
        }

        Ok(LaunchDataset {
            records,
            sites,
            min_payload,
            max_payload,
        })
    }

    /// Number of launches.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Total number of successful launches across all sites.
    pub fn success_count(&self) -> usize {
        self.records.iter().filter(|r| r.outcome.is_success()).count()
    }
}
