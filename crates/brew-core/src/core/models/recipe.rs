use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct FermentableAddition {
    pub name: String,
    pub mass_kilograms: f64,
    pub points_per_pound_per_gallon: f64,
}

impl FermentableAddition {
    pub fn new(name: impl Into<String>, mass_kilograms: f64, ppg: f64) -> Self {
        Self {
            name: name.into(),
            mass_kilograms,
            points_per_pound_per_gallon: ppg,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct HopAddition {
    pub name: String,
    pub mass_grams: f64,
    pub alpha_acid_fraction: f64,
    pub boil_time_minutes: f64,
}

impl HopAddition {
    pub fn new(
        name: impl Into<String>,
        mass_grams: f64,
        alpha_acid_fraction: f64,
        boil_time_minutes: f64,
    ) -> Self {
        Self {
            name: name.into(),
            mass_grams,
            alpha_acid_fraction,
            boil_time_minutes,
        }
    }
}

/// A validated recipe, ready for calculation.
///
/// Ingredient entries are expected to carry positive masses, extract potentials, and
/// alpha-acid fractions; the recipe sheet reader drops rows that do not. Scalar fields
/// may be zero, in which case the dependent metrics come out as not computable
/// (or, for the pre-boil volume, as "unknown").
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Recipe {
    pub final_volume_liters: f64,
    #[serde(default)]
    pub preboil_volume_liters: f64,
    pub efficiency_fraction: f64,
    pub attenuation_fraction: f64,
    #[serde(default)]
    pub fermentables: Vec<FermentableAddition>,
    #[serde(default)]
    pub hop_additions: Vec<HopAddition>,
}

impl Recipe {
    pub fn new(
        final_volume_liters: f64,
        preboil_volume_liters: f64,
        efficiency_fraction: f64,
        attenuation_fraction: f64,
    ) -> Self {
        Self {
            final_volume_liters,
            preboil_volume_liters,
            efficiency_fraction,
            attenuation_fraction,
            fermentables: Vec::new(),
            hop_additions: Vec::new(),
        }
    }

    pub fn with_fermentable(mut self, fermentable: FermentableAddition) -> Self {
        self.fermentables.push(fermentable);
        self
    }

    pub fn with_hop(mut self, hop: HopAddition) -> Self {
        self.hop_additions.push(hop);
        self
    }

    pub fn has_ingredients(&self) -> bool {
        !self.fermentables.is_empty() || !self.hop_additions.is_empty()
    }
}
