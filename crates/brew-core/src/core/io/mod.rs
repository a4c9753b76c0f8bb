//! # Recipe I/O Module
//!
//! Reading and writing recipes in the user-facing "sheet" form: percentages instead of
//! fractions, optional fields, and ingredient rows that may still be incomplete.
//!
//! ## Key Components
//!
//! - [`sheet`] - The [`sheet::RecipeSheet`] model and its sanitizing conversion into a `Recipe`
//! - [`traits`] - The [`traits::RecipeFile`] trait shared by on-disk formats
//! - [`recipe_file`] - The TOML implementation of [`traits::RecipeFile`]

pub mod recipe_file;
pub mod sheet;
pub mod traits;
