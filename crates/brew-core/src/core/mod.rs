//! # Core Module
//!
//! This module provides the building blocks of the recipe calculator: the data model,
//! the unit conversions, and the empirical formulas that turn ingredients into
//! density and bitterness estimates.
//!
//! ## Architecture
//!
//! - **Recipe Representation** ([`models`]) - Recipes, ingredient additions, metrics, and the
//!   [`models::estimate::Estimate`] result type
//! - **Unit Conversions** ([`units`]) - Kilograms to pounds and liters to gallons
//! - **Brewing Formulas** ([`formulas`]) - Gravity, hop utilization, bitterness, and fermentation
//! - **Presentation** ([`display`]) - Fixed-precision formatting with an explicit placeholder
//! - **File I/O** ([`io`]) - Reading and writing user-facing recipe sheets
//!
//! ## Scientific Foundation
//!
//! - **Extract potential** expressed as points per pound per gallon (PPG)
//! - **Tinseth utilization** for alpha-acid isomerization during the boil
//! - **Linear attenuation** of gravity points for final gravity
//! - **The 131.25 approximation** for alcohol by volume from the gravity drop

pub mod display;
pub mod formulas;
pub mod io;
pub mod models;
pub mod units;
