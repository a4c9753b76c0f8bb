//! # Engine Module
//!
//! The calculation pipeline that turns one [`Recipe`](crate::core::models::recipe::Recipe)
//! into its [`RecipeMetrics`](crate::core::models::metrics::RecipeMetrics).
//!
//! ## Overview
//!
//! The engine runs the brewing formulas in a fixed order:
//!
//! ```text
//! Recipe ─► original gravity ─► boil gravity ─► bitterness
//!                     └───────► final gravity ─► alcohol by volume
//! ```
//!
//! Every step is a pure function of its inputs. A value that cannot be computed is
//! carried forward as [`Estimate::NotComputable`](crate::core::models::estimate::Estimate)
//! so that independent metrics still come out; the engine never fails and never
//! mutates the recipe.
//!
//! - **Calculation** ([`calculator`]) - The pipeline itself
//! - **Progress Monitoring** ([`progress`]) - Callbacks used by long-running callers

pub mod calculator;
pub mod progress;
