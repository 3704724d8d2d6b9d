use super::filter::SiteSelection;
use super::model::{LaunchDataset, Outcome};

/// One wedge of the success pie chart.
#[derive(Debug, Clone, PartialEq)]
pub struct PieSlice {
    /// Site label for `All`, outcome class flag for a single site.
    pub label: String,
    pub count: usize,
    /// Share of the total over all returned slices; `0.0` when the total is zero.
    pub fraction: f64,
}

/// Success counts for the pie chart.
///
/// * `All`: one slice per site (dataset site order) counting its successful
///   launches. Sites without a success keep a zero slice.
/// * single site: one slice per outcome present at that site, failure first,
///   counting its launches. A site without records gives no slices.
pub fn site_success_counts(dataset: &LaunchDataset, site: &SiteSelection) -> Vec<PieSlice> {
    let counts: Vec<(String, usize)> = match site {
        SiteSelection::All => dataset
            .sites
            .iter()
            .map(|s| {
                let successes = dataset
                    .records
                    .iter()
                    .filter(|r| &r.site == s && r.outcome.is_success())
                    .count();
                (s.clone(), successes)
            })
            .collect(),
        SiteSelection::Site(selected) => [Outcome::Failure, Outcome::Success]
            .into_iter()
            .map(|outcome| {
                let n = dataset
                    .records
                    .iter()
                    .filter(|r| &r.site == selected && r.outcome == outcome)
                    .count();
                (outcome.to_string(), n)
            })
            .filter(|(_, n)| *n > 0)
            .collect(),
    };

    let total: usize = counts.iter().map(|(_, n)| n).sum();
    counts
        .into_iter()
        .map(|(label, count)| PieSlice {
            label,
            count,
            fraction: if total == 0 {
                0.0
            } else {
                count as f64 / total as f64
            },
        })
        .collect()
}

/// Title shown above the pie chart.
pub fn pie_title(site: &SiteSelection) -> String {
    match site {
        SiteSelection::All => "Total Successful Launches by Site".to_string(),
        SiteSelection::Site(s) => format!("Success vs. Failure at {s}"),
    }
}
