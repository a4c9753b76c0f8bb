use super::is_positive;
use crate::core::models::estimate::Estimate;

/// Empirical factor converting a gravity drop into percent alcohol by volume.
const ABV_FACTOR: f64 = 131.25;

pub fn estimate_final_gravity(original_gravity: Estimate, attenuation_fraction: f64) -> Estimate {
    if !is_positive(attenuation_fraction) {
        return Estimate::NotComputable;
    }
    original_gravity.map(|og| 1.0 + (og - 1.0) * (1.0 - attenuation_fraction))
}

pub fn estimate_alcohol_by_volume(original_gravity: Estimate, final_gravity: Estimate) -> Estimate {
    original_gravity.zip_with(final_gravity, |og, fg| (og - fg) * ABV_FACTOR)
}
