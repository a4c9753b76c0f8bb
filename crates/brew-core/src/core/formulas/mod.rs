//! # Brewing Formulas Module
//!
//! Pure functions implementing the empirical models behind every recipe metric.
//! Each function takes plain numbers or [`Estimate`](crate::core::models::estimate::Estimate)s
//! and returns a fresh result; none of them keeps state or touches I/O.
//!
//! ## Key Components
//!
//! - [`gravity`] - Original gravity from extract potential, and boil gravity from dilution
//! - [`utilization`] - Tinseth hop utilization as a function of boil gravity and time
//! - [`bitterness`] - Total IBU summed over hop additions
//! - [`fermentation`] - Final gravity from attenuation, and alcohol by volume
//!
//! Inputs that must be positive are tested with `x > 0.0`, so NaN is treated the
//! same as zero and yields a "not computable" result instead of a bogus number.

pub mod bitterness;
pub mod fermentation;
pub mod gravity;
pub mod utilization;

#[inline]
pub(crate) fn is_positive(value: f64) -> bool {
    value > 0.0
}
