use super::models::RecipeDefaults;
use brewcalc::core::models::recipe::{FermentableAddition, HopAddition, Recipe};

pub struct DefaultsConfig {
    pub final_volume_liters: f64,
    pub preboil_volume_liters: f64,
    pub efficiency_percent: f64,
    pub attenuation_percent: f64,
    pub store_key: String,
}

impl Default for DefaultsConfig {
    fn default() -> Self {
        Self {
            final_volume_liters: 20.0,
            preboil_volume_liters: 27.0,
            efficiency_percent: 72.0,
            attenuation_percent: 75.0,
            store_key: "last-recipe".to_string(),
        }
    }
}

pub fn starter_fermentable() -> FermentableAddition {
    FermentableAddition::new("Pale", 4.5, 37.0)
}

pub fn starter_hop() -> HopAddition {
    HopAddition::new("Cascade", 25.0, 0.06, 60.0)
}

/// The recipe shown when nothing has been saved yet: a single-malt, single-hop pale ale.
pub fn starter_recipe(defaults: &RecipeDefaults) -> Recipe {
    Recipe::new(
        defaults.final_volume_liters,
        defaults.preboil_volume_liters,
        defaults.efficiency_percent / 100.0,
        defaults.attenuation_percent / 100.0,
    )
    .with_fermentable(starter_fermentable())
    .with_hop(starter_hop())
}
