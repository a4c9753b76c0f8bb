//! # Core Models Module
//!
//! This module contains the plain data structures exchanged with the calculation engine.
//!
//! ## Key Components
//!
//! - [`recipe`] - The validated recipe record and its fermentable and hop additions
//! - [`metrics`] - The five derived metrics produced by one calculation
//! - [`estimate`] - A tagged result distinguishing a computed value from "not computable"
//!
//! ## Usage
//!
//! ```ignore
//! use brewcalc::core::models::recipe::{FermentableAddition, HopAddition, Recipe};
//!
//! let recipe = Recipe::new(20.0, 27.0, 0.72, 0.75)
//!     .with_fermentable(FermentableAddition::new("Pale", 4.5, 37.0))
//!     .with_hop(HopAddition::new("Cascade", 25.0, 0.06, 60.0));
//! ```

pub mod estimate;
pub mod metrics;
pub mod recipe;
