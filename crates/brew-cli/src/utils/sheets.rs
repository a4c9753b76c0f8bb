use crate::cli::RecipeOverrides;
use crate::config::models::RecipeDefaults;
use crate::error::{CliError, Result};
use brewcalc::core::io::recipe_file::TomlRecipeFile;
use brewcalc::core::io::sheet::RecipeSheet;
use brewcalc::core::io::traits::RecipeFile;
use brewcalc::core::models::recipe::Recipe;
use std::path::Path;
use tracing::{debug, warn};

pub fn read_sheet(path: &Path) -> Result<RecipeSheet> {
    debug!("Reading recipe sheet from {:?}", path);
    TomlRecipeFile::read_from_path(path).map_err(|e| CliError::FileParsing {
        path: path.to_path_buf(),
        source: e.into(),
    })
}

pub fn apply_overrides(sheet: &mut RecipeSheet, overrides: &RecipeOverrides) {
    if let Some(v) = overrides.final_volume {
        sheet.final_volume_liters = Some(v);
    }
    if let Some(v) = overrides.preboil_volume {
        sheet.preboil_volume_liters = Some(v);
    }
    if let Some(v) = overrides.efficiency {
        sheet.efficiency_percent = Some(v);
    }
    if let Some(v) = overrides.attenuation {
        sheet.attenuation_percent = Some(v);
    }
}

/// Reads a sheet and resolves it into a recipe: explicit overrides first, then the
/// sheet's own values, then the configured defaults.
pub fn load_recipe(
    path: &Path,
    overrides: &RecipeOverrides,
    defaults: &RecipeDefaults,
) -> Result<Recipe> {
    let mut sheet = read_sheet(path)?;
    apply_overrides(&mut sheet, overrides);
    defaults.fill_missing(&mut sheet);

    let recipe = sheet.to_recipe();
    let dropped_fermentables = sheet.fermentables.len() - recipe.fermentables.len();
    let dropped_hops = sheet.hops.len() - recipe.hop_additions.len();
    if dropped_fermentables + dropped_hops > 0 {
        warn!(
            "Ignored {} fermentable and {} hop row(s) with missing or non-positive values in {:?}.",
            dropped_fermentables, dropped_hops, path
        );
    }
    Ok(recipe)
}
