//! # BrewCalc Core Library
//!
//! A small, dependable library for estimating the outcome of a homebrew recipe:
//! original gravity, boil gravity, bitterness, final gravity, and alcohol by volume.
//!
//! ## Architectural Philosophy
//!
//! The library follows a strict three-layer layout so that the numeric core stays
//! free of I/O and can be called identically from a UI, a test harness, or a batch script.
//!
//! - **[`core`]: The Foundation.** Immutable data models (`Recipe`, `RecipeMetrics`),
//!   the `Estimate` result type, unit conversions, the empirical brewing formulas,
//!   display formatting, and recipe sheet I/O.
//!
//! - **[`engine`]: The Calculation Pipeline.** A stateless function that runs the
//!   formulas in a fixed order over one recipe, plus the progress reporting hooks used
//!   by long-running callers.
//!
//! - **[`workflows`]: The Public API for bulk work.** Evaluates many recipes in parallel
//!   and renders the results as a CSV report.

pub mod core;
pub mod engine;
pub mod workflows;
