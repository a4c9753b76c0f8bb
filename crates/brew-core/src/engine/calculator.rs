use crate::core::formulas::bitterness::estimate_bitterness;
use crate::core::formulas::fermentation::{estimate_alcohol_by_volume, estimate_final_gravity};
use crate::core::formulas::gravity::{estimate_boil_gravity, estimate_original_gravity};
use crate::core::models::metrics::RecipeMetrics;
use crate::core::models::recipe::Recipe;
use tracing::debug;

pub fn calculate(recipe: &Recipe) -> RecipeMetrics {
    let original_gravity = estimate_original_gravity(
        recipe.final_volume_liters,
        recipe.efficiency_fraction,
        &recipe.fermentables,
    );
    let boil_gravity = estimate_boil_gravity(
        original_gravity,
        recipe.final_volume_liters,
        recipe.preboil_volume_liters,
    );
    let bitterness_ibu = estimate_bitterness(
        recipe.final_volume_liters,
        boil_gravity,
        &recipe.hop_additions,
    );
    let final_gravity = estimate_final_gravity(original_gravity, recipe.attenuation_fraction);
    let alcohol_by_volume_percent = estimate_alcohol_by_volume(original_gravity, final_gravity);

    let metrics = RecipeMetrics {
        original_gravity,
        boil_gravity,
        bitterness_ibu,
        final_gravity,
        alcohol_by_volume_percent,
    };
    debug!(
        fermentables = recipe.fermentables.len(),
        hop_additions = recipe.hop_additions.len(),
        ?metrics,
        "Calculated recipe metrics."
    );
    metrics
}
