use brewcalc::core::io::sheet::RecipeSheet;
use std::path::PathBuf;

/// Values used for scalars a recipe sheet leaves out.
///
/// The pre-boil volume only seeds the starter recipe: a sheet without one
/// keeps it unknown, so the boil gravity falls back to the original gravity.
#[derive(Debug, Clone, PartialEq)]
pub struct RecipeDefaults {
    pub final_volume_liters: f64,
    pub preboil_volume_liters: f64,
    pub efficiency_percent: f64,
    pub attenuation_percent: f64,
}

impl RecipeDefaults {
    pub fn fill_missing(&self, sheet: &mut RecipeSheet) {
        sheet
            .final_volume_liters
            .get_or_insert(self.final_volume_liters);
        sheet
            .efficiency_percent
            .get_or_insert(self.efficiency_percent);
        sheet
            .attenuation_percent
            .get_or_insert(self.attenuation_percent);
    }
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub recipe_defaults: RecipeDefaults,
    /// `None` selects the platform data directory.
    pub store_path: Option<PathBuf>,
    pub store_key: String,
}
