use crate::core::models::recipe::{FermentableAddition, HopAddition, Recipe};
use serde::{Deserialize, Serialize};

const PERCENT: f64 = 100.0;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case", deny_unknown_fields)]
pub struct FermentableRow {
    #[serde(default)]
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mass_kg: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ppg: Option<f64>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case", deny_unknown_fields)]
pub struct HopRow {
    #[serde(default)]
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mass_grams: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub alpha_acid_percent: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub boil_minutes: Option<f64>,
}

/// A recipe as a person writes it down.
///
/// Efficiency, attenuation, and alpha acids are given in percent, every number may be
/// missing, and ingredient rows may be half filled in. [`RecipeSheet::to_recipe`]
/// turns the sheet into a validated [`Recipe`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case", deny_unknown_fields)]
pub struct RecipeSheet {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub final_volume_liters: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub preboil_volume_liters: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub efficiency_percent: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub attenuation_percent: Option<f64>,
    #[serde(default)]
    pub fermentables: Vec<FermentableRow>,
    #[serde(default)]
    pub hops: Vec<HopRow>,
}

/// Missing or non-finite numbers read as zero.
fn number(value: Option<f64>) -> f64 {
    value.filter(|v| v.is_finite()).unwrap_or(0.0)
}

impl FermentableRow {
    fn to_addition(&self) -> Option<FermentableAddition> {
        let mass_kg = number(self.mass_kg);
        let ppg = number(self.ppg);
        (mass_kg > 0.0 && ppg > 0.0)
            .then(|| FermentableAddition::new(self.name.trim(), mass_kg, ppg))
    }
}

impl HopRow {
    fn to_addition(&self) -> Option<HopAddition> {
        let mass_grams = number(self.mass_grams);
        let alpha_acid_fraction = number(self.alpha_acid_percent) / PERCENT;
        let boil_minutes = number(self.boil_minutes);
        (mass_grams > 0.0 && alpha_acid_fraction > 0.0 && boil_minutes >= 0.0).then(|| {
            HopAddition::new(
                self.name.trim(),
                mass_grams,
                alpha_acid_fraction,
                boil_minutes,
            )
        })
    }
}

impl RecipeSheet {
    /// Converts the sheet into a validated recipe.
    ///
    /// Fermentable rows without a positive mass and PPG, and hop rows without a
    /// positive mass and alpha acid or with a negative boil time, are dropped.
    pub fn to_recipe(&self) -> Recipe {
        Recipe {
            final_volume_liters: number(self.final_volume_liters),
            preboil_volume_liters: number(self.preboil_volume_liters),
            efficiency_fraction: number(self.efficiency_percent) / PERCENT,
            attenuation_fraction: number(self.attenuation_percent) / PERCENT,
            fermentables: self
                .fermentables
                .iter()
                .filter_map(FermentableRow::to_addition)
                .collect(),
            hop_additions: self.hops.iter().filter_map(HopRow::to_addition).collect(),
        }
    }

    pub fn from_recipe(recipe: &Recipe) -> Self {
        Self {
            final_volume_liters: Some(recipe.final_volume_liters),
            preboil_volume_liters: (recipe.preboil_volume_liters > 0.0)
                .then_some(recipe.preboil_volume_liters),
            efficiency_percent: Some(recipe.efficiency_fraction * PERCENT),
            attenuation_percent: Some(recipe.attenuation_fraction * PERCENT),
            fermentables: recipe
                .fermentables
                .iter()
                .map(|f| FermentableRow {
                    name: f.name.clone(),
                    mass_kg: Some(f.mass_kilograms),
                    ppg: Some(f.points_per_pound_per_gallon),
                })
                .collect(),
            hops: recipe
                .hop_additions
                .iter()
                .map(|h| HopRow {
                    name: h.name.clone(),
                    mass_grams: Some(h.mass_grams),
                    alpha_acid_percent: Some(h.alpha_acid_fraction * PERCENT),
                    boil_minutes: Some(h.boil_time_minutes),
                })
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TOLERANCE: f64 = 1e-12;

    fn fermentable(name: &str, mass_kg: Option<f64>, ppg: Option<f64>) -> FermentableRow {
        FermentableRow {
            name: name.to_string(),
            mass_kg,
            ppg,
        }
    }

    fn hop(name: &str, grams: Option<f64>, alpha: Option<f64>, minutes: Option<f64>) -> HopRow {
        HopRow {
            name: name.to_string(),
            mass_grams: grams,
            alpha_acid_percent: alpha,
            boil_minutes: minutes,
        }
    }

    fn complete_sheet() -> RecipeSheet {
        RecipeSheet {
            final_volume_liters: Some(20.0),
            preboil_volume_liters: Some(27.0),
            efficiency_percent: Some(72.0),
            attenuation_percent: Some(75.0),
            fermentables: vec![fermentable("  Pale ", Some(4.5), Some(37.0))],
            hops: vec![hop("Cascade", Some(25.0), Some(6.0), Some(60.0))],
        }
    }

    #[test]
    fn to_recipe_converts_percentages_to_fractions() {
        let recipe = complete_sheet().to_recipe();
        assert_eq!(recipe.final_volume_liters, 20.0);
        assert_eq!(recipe.preboil_volume_liters, 27.0);
        assert!((recipe.efficiency_fraction - 0.72).abs() < TOLERANCE);
        assert!((recipe.attenuation_fraction - 0.75).abs() < TOLERANCE);
        assert!((recipe.hop_additions[0].alpha_acid_fraction - 0.06).abs() < TOLERANCE);
    }

    #[test]
    fn to_recipe_trims_ingredient_names() {
        let recipe = complete_sheet().to_recipe();
        assert_eq!(recipe.fermentables[0].name, "Pale");
    }

    #[test]
    fn missing_scalars_become_zero() {
        let recipe = RecipeSheet::default().to_recipe();
        assert_eq!(recipe.final_volume_liters, 0.0);
        assert_eq!(recipe.preboil_volume_liters, 0.0);
        assert_eq!(recipe.efficiency_fraction, 0.0);
        assert_eq!(recipe.attenuation_fraction, 0.0);
    }

    #[test]
    fn non_finite_scalars_become_zero() {
        let sheet = RecipeSheet {
            final_volume_liters: Some(f64::NAN),
            efficiency_percent: Some(f64::INFINITY),
            ..complete_sheet()
        };
        let recipe = sheet.to_recipe();
        assert_eq!(recipe.final_volume_liters, 0.0);
        assert_eq!(recipe.efficiency_fraction, 0.0);
    }

    #[test]
    fn invalid_fermentable_rows_are_dropped() {
        let sheet = RecipeSheet {
            fermentables: vec![
                fermentable("Pale", Some(4.5), Some(37.0)),
                fermentable("Empty", Some(0.0), Some(37.0)),
                fermentable("NoPotential", Some(1.0), Some(0.0)),
                fermentable("Negative", Some(-1.0), Some(37.0)),
                fermentable("Blank", None, None),
                fermentable("Munich", Some(0.5), Some(35.0)),
            ],
            ..complete_sheet()
        };
        let names: Vec<_> = sheet
            .to_recipe()
            .fermentables
            .into_iter()
            .map(|f| f.name)
            .collect();
        assert_eq!(names, vec!["Pale", "Munich"]);
    }

    #[test]
    fn invalid_hop_rows_are_dropped() {
        let sheet = RecipeSheet {
            hops: vec![
                hop("Cascade", Some(25.0), Some(6.0), Some(60.0)),
                hop("NoMass", Some(0.0), Some(6.0), Some(60.0)),
                hop("NoAlpha", Some(25.0), Some(0.0), Some(60.0)),
                hop("Negative", Some(25.0), Some(6.0), Some(-5.0)),
                hop("Whirlpool", Some(30.0), Some(12.0), None),
            ],
            ..complete_sheet()
        };
        let hops = sheet.to_recipe().hop_additions;
        assert_eq!(hops.len(), 2);
        assert_eq!(hops[0].name, "Cascade");
        assert_eq!(hops[1].name, "Whirlpool");
        assert_eq!(hops[1].boil_time_minutes, 0.0);
    }

    #[test]
    fn from_recipe_is_the_inverse_view() {
        let recipe = complete_sheet().to_recipe();
        let sheet = RecipeSheet::from_recipe(&recipe);
        let again = sheet.to_recipe();

        assert_eq!(again.fermentables, recipe.fermentables);
        assert_eq!(again.final_volume_liters, recipe.final_volume_liters);
        assert!((again.efficiency_fraction - recipe.efficiency_fraction).abs() < TOLERANCE);
        assert!(
            (again.hop_additions[0].alpha_acid_fraction
                - recipe.hop_additions[0].alpha_acid_fraction)
                .abs()
                < TOLERANCE
        );
    }

    #[test]
    fn from_recipe_omits_unknown_preboil_volume() {
        let mut recipe = complete_sheet().to_recipe();
        recipe.preboil_volume_liters = 0.0;
        assert_eq!(RecipeSheet::from_recipe(&recipe).preboil_volume_liters, None);
    }
}
