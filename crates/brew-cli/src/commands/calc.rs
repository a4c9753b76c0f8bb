use crate::cli::CalcArgs;
use crate::config::models::AppConfig;
use crate::error::Result;
use crate::utils::sheets;
use brewcalc::core::display::MetricsReport;
use brewcalc::core::models::recipe::Recipe;
use brewcalc::engine::calculator::calculate;
use tracing::{info, warn};

pub fn run(args: CalcArgs, config: &AppConfig) -> Result<()> {
    let recipe = sheets::load_recipe(&args.recipe, &args.overrides, &config.recipe_defaults)?;
    info!(
        "Loaded recipe from {:?} with {} fermentable(s) and {} hop addition(s).",
        args.recipe,
        recipe.fermentables.len(),
        recipe.hop_additions.len()
    );

    if !recipe.has_ingredients() {
        warn!("The recipe lists no usable fermentables or hops.");
    }

    let metrics = calculate(&recipe);
    if !metrics.is_fully_computable() {
        warn!("Some metrics could not be computed; check the volumes, efficiency, and attenuation.");
    }

    println!("{}", summary_line(&recipe));
    print!("{}", MetricsReport::new(&metrics));
    Ok(())
}

pub(crate) fn summary_line(recipe: &Recipe) -> String {
    format!(
        "{:.1} L into the fermenter, {} fermentable(s), {} hop addition(s)",
        recipe.final_volume_liters,
        recipe.fermentables.len(),
        recipe.hop_additions.len()
    )
}
