use crate::core::models::estimate::Estimate;
use crate::core::models::metrics::RecipeMetrics;
use std::fmt;

/// Shown in place of any metric that could not be computed.
pub const PLACEHOLDER: &str = "—";

fn format_with(estimate: Estimate, render: impl FnOnce(f64) -> String) -> String {
    match estimate {
        Estimate::Value(v) => render(v),
        Estimate::NotComputable => PLACEHOLDER.to_string(),
    }
}

pub fn format_gravity(estimate: Estimate) -> String {
    format_with(estimate, |v| format!("{:.3}", v))
}

pub fn format_bitterness(estimate: Estimate) -> String {
    format_with(estimate, |v| format!("{:.1}", v))
}

pub fn format_abv(estimate: Estimate) -> String {
    format_with(estimate, |v| format!("{:.1} %", v))
}

/// A human-readable table of the five metrics.
pub struct MetricsReport<'a> {
    metrics: &'a RecipeMetrics,
}

impl<'a> MetricsReport<'a> {
    pub fn new(metrics: &'a RecipeMetrics) -> Self {
        Self { metrics }
    }

    pub fn rows(&self) -> [(&'static str, String); 5] {
        [
            (
                "Original gravity",
                format_gravity(self.metrics.original_gravity),
            ),
            ("Boil gravity", format_gravity(self.metrics.boil_gravity)),
            ("Bitterness (IBU)", format_bitterness(self.metrics.bitterness_ibu)),
            ("Final gravity", format_gravity(self.metrics.final_gravity)),
            (
                "Alcohol by volume",
                format_abv(self.metrics.alcohol_by_volume_percent),
            ),
        ]
    }
}

impl fmt::Display for MetricsReport<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (label, value) in self.rows() {
            writeln!(f, "{:<18} {:>8}", label, value)?;
        }
        Ok(())
    }
}
