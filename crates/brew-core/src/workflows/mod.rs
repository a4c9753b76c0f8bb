//! # Workflows Module
//!
//! High-level entry points that combine the engine with the display layer for bulk work.
//!
//! - **Batch Evaluation** ([`batch`]) - Calculates many recipes in parallel, reports
//!   progress, and renders a CSV summary.

pub mod batch;
