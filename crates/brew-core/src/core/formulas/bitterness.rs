use super::is_positive;
use super::utilization::utilization;
use crate::core::models::estimate::Estimate;
use crate::core::models::recipe::HopAddition;

const MILLIGRAMS_PER_GRAM: f64 = 1000.0;
const VOLUME_SCALE: f64 = 10.0;

#[inline]
pub fn hop_contribution(final_volume_liters: f64, boil_gravity: Estimate, hop: &HopAddition) -> f64 {
    let u = utilization(boil_gravity, hop.boil_time_minutes);
    (hop.alpha_acid_fraction * hop.mass_grams * MILLIGRAMS_PER_GRAM * u)
        / (final_volume_liters * VOLUME_SCALE)
}

pub fn estimate_bitterness(
    final_volume_liters: f64,
    boil_gravity: Estimate,
    hop_additions: &[HopAddition],
) -> Estimate {
    if !is_positive(final_volume_liters) || !boil_gravity.is_computable() {
        return Estimate::NotComputable;
    }

    let ibu = hop_additions.iter().fold(0.0, |acc, hop| {
        acc + hop_contribution(final_volume_liters, boil_gravity, hop)
    });
    Estimate::from_value(ibu)
}
