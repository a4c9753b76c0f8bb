use super::estimate::Estimate;

/// The five metrics derived from one recipe.
///
/// Metrics are recomputed on demand and never persisted.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct RecipeMetrics {
    pub original_gravity: Estimate,
    pub boil_gravity: Estimate,
    pub bitterness_ibu: Estimate,
    pub final_gravity: Estimate,
    pub alcohol_by_volume_percent: Estimate,
}

impl RecipeMetrics {
    pub fn is_fully_computable(&self) -> bool {
        [
            self.original_gravity,
            self.boil_gravity,
            self.bitterness_ibu,
            self.final_gravity,
            self.alcohol_by_volume_percent,
        ]
        .iter()
        .all(|e| e.is_computable())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_metrics_are_all_not_computable() {
        let metrics = RecipeMetrics::default();
        assert_eq!(metrics.original_gravity, Estimate::NotComputable);
        assert_eq!(metrics.alcohol_by_volume_percent, Estimate::NotComputable);
        assert!(!metrics.is_fully_computable());
    }

    #[test]
    fn is_fully_computable_requires_every_metric() {
        let mut metrics = RecipeMetrics {
            original_gravity: Estimate::Value(1.05),
            boil_gravity: Estimate::Value(1.037),
            bitterness_ibu: Estimate::Value(20.0),
            final_gravity: Estimate::Value(1.012),
            alcohol_by_volume_percent: Estimate::Value(5.0),
        };
        assert!(metrics.is_fully_computable());

        metrics.final_gravity = Estimate::NotComputable;
        assert!(!metrics.is_fully_computable());
    }
}
