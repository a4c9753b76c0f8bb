use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

const HELP_TEMPLATE: &str = "\
{before-help}{name} {version}
{author-with-newline}{about-with-newline}
{usage-heading} {usage}

{all-args}{after-help}
";

#[derive(Parser, Debug)]
#[command(
    author = "BrewCalc Contributors",
    version,
    about = "Brew CLI - Instant gravity, bitterness, and alcohol estimates for homebrew recipes.",
    help_template = HELP_TEMPLATE,
)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Increase verbosity level (-v for INFO, -vv for DEBUG, -vvv for TRACE)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all log output except for errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Write logs to a specified file in addition to the console output
    #[arg(long, global = true, value_name = "PATH")]
    pub log_file: Option<PathBuf>,

    /// Path to a configuration file in TOML format.
    #[arg(short, long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Set a specific configuration value, overriding the config file.
    /// Can be used multiple times. Example: -S defaults.efficiency-percent=68
    #[arg(short = 'S', long = "set", value_name = "KEY=VALUE", global = true)]
    pub set_values: Vec<String>,

    /// Set the number of threads for batch evaluation.
    /// Defaults to the number of available logical cores.
    #[arg(short = 'j', long, global = true, value_name = "NUM")]
    pub threads: Option<usize>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Calculate the metrics of a single recipe sheet.
    Calc(CalcArgs),
    /// Calculate many recipe sheets at once and optionally write a CSV report.
    Batch(BatchArgs),
    /// Save, restore, and manage recipes in the local recipe store.
    Store(StoreArgs),
    /// Write the default recipe sheet as a starting point.
    Template(TemplateArgs),
}

/// Overrides applied on top of the values found in a recipe sheet.
#[derive(Args, Debug, Clone, Default)]
pub struct RecipeOverrides {
    /// Override the volume in the fermenter, in liters.
    #[arg(long, value_name = "LITERS")]
    pub final_volume: Option<f64>,

    /// Override the pre-boil volume, in liters (0 means unknown).
    #[arg(long, value_name = "LITERS")]
    pub preboil_volume: Option<f64>,

    /// Override the mash efficiency, in percent.
    #[arg(short, long, value_name = "PERCENT")]
    pub efficiency: Option<f64>,

    /// Override the yeast attenuation, in percent.
    #[arg(short, long, value_name = "PERCENT")]
    pub attenuation: Option<f64>,
}

/// Arguments for the `calc` subcommand.
#[derive(Args, Debug)]
pub struct CalcArgs {
    /// Path to the recipe sheet (TOML).
    #[arg(required = true, value_name = "PATH")]
    pub recipe: PathBuf,

    #[command(flatten)]
    pub overrides: RecipeOverrides,
}

/// Arguments for the `batch` subcommand.
#[derive(Args, Debug)]
pub struct BatchArgs {
    /// Paths to the recipe sheets (TOML).
    #[arg(required = true, num_args = 1.., value_name = "PATH")]
    pub recipes: Vec<PathBuf>,

    /// Write a CSV report to this path.
    #[arg(short, long, value_name = "PATH")]
    pub report: Option<PathBuf>,
}

/// Arguments for the `store` subcommand.
#[derive(Args, Debug)]
pub struct StoreArgs {
    #[command(subcommand)]
    pub command: StoreCommands,
}

/// Available commands for the recipe store.
#[derive(Subcommand, Debug)]
pub enum StoreCommands {
    /// Save a recipe sheet under a key.
    Save {
        /// Path to the recipe sheet (TOML).
        #[arg(required = true, value_name = "PATH")]
        recipe: PathBuf,
        /// Key to store the recipe under.
        #[arg(short, long, value_name = "KEY")]
        key: Option<String>,
    },
    /// Restore a recipe and show its metrics.
    Load {
        /// Key of the recipe to restore.
        #[arg(short, long, value_name = "KEY")]
        key: Option<String>,
        /// Also write the restored recipe as a recipe sheet.
        #[arg(long, value_name = "PATH")]
        export: Option<PathBuf>,
    },
    /// List the keys of all stored recipes.
    List,
    /// Remove a stored recipe.
    Remove {
        /// Key of the recipe to remove.
        #[arg(required = true, value_name = "KEY")]
        key: String,
    },
    /// Show the absolute path to the recipe store directory.
    Path,
}

/// Arguments for the `template` subcommand.
#[derive(Args, Debug)]
pub struct TemplateArgs {
    /// Write the template to this path instead of standard output.
    #[arg(short, long, value_name = "PATH")]
    pub output: Option<PathBuf>,
}
