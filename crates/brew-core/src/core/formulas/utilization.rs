use super::is_positive;
use crate::core::models::estimate::Estimate;

const BIGNESS_COEFFICIENT: f64 = 1.65;
const BIGNESS_BASE: f64 = 0.000125;
const BOIL_TIME_RATE_PER_MINUTE: f64 = 0.04;
const BOIL_TIME_DIVISOR: f64 = 4.15;

/// Wort density penalty: denser wort isomerizes less alpha acid.
#[inline]
pub fn bigness_factor(boil_gravity: f64) -> f64 {
    BIGNESS_COEFFICIENT * BIGNESS_BASE.powf(boil_gravity - 1.0)
}

#[inline]
pub fn boil_time_factor(boil_time_minutes: f64) -> f64 {
    (1.0 - (-BOIL_TIME_RATE_PER_MINUTE * boil_time_minutes).exp()) / BOIL_TIME_DIVISOR
}

/// Fraction of alpha acids isomerized into solution (Tinseth).
///
/// Returns 0 for a non-positive boil time or a boil gravity that could not be computed.
pub fn utilization(boil_gravity: Estimate, boil_time_minutes: f64) -> f64 {
    let Some(gravity) = boil_gravity.value() else {
        return 0.0;
    };
    if !is_positive(boil_time_minutes) {
        return 0.0;
    }
    bigness_factor(gravity) * boil_time_factor(boil_time_minutes)
}
