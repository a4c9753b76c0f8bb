use super::is_positive;
use crate::core::models::estimate::Estimate;
use crate::core::models::recipe::FermentableAddition;
use crate::core::units::{kilograms_to_pounds, liters_to_gallons};

const POINTS_PER_GRAVITY_UNIT: f64 = 1000.0;

/// Extract potential of the grist, in pound-PPG (before efficiency).
pub fn total_extract_points(fermentables: &[FermentableAddition]) -> f64 {
    fermentables.iter().fold(0.0, |acc, f| {
        acc + kilograms_to_pounds(f.mass_kilograms) * f.points_per_pound_per_gallon
    })
}

pub fn estimate_original_gravity(
    final_volume_liters: f64,
    efficiency_fraction: f64,
    fermentables: &[FermentableAddition],
) -> Estimate {
    let gallons = liters_to_gallons(final_volume_liters);
    if !is_positive(gallons) || !is_positive(efficiency_fraction) {
        return Estimate::NotComputable;
    }

    let points = total_extract_points(fermentables) * efficiency_fraction / gallons;
    Estimate::from_value(1.0 + points / POINTS_PER_GRAVITY_UNIT)
}

/// Gravity of the wort at the start of the boil.
///
/// When the pre-boil volume is unknown, the original gravity is returned as-is.
pub fn estimate_boil_gravity(
    original_gravity: Estimate,
    final_volume_liters: f64,
    preboil_volume_liters: f64,
) -> Estimate {
    original_gravity.and_then(|og| {
        if !is_positive(preboil_volume_liters) || !is_positive(final_volume_liters) {
            return Estimate::Value(og);
        }
        Estimate::from_value(1.0 + (og - 1.0) * (final_volume_liters / preboil_volume_liters))
    })
}
