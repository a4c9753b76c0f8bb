use crate::cli::{BatchArgs, RecipeOverrides};
use crate::config::models::AppConfig;
use crate::error::Result;
use crate::utils::progress::CliProgressHandler;
use crate::utils::sheets;
use brewcalc::core::display::{format_abv, format_bitterness, format_gravity};
use brewcalc::engine::progress::ProgressReporter;
use brewcalc::workflows::batch::{self, BatchEntry};
use std::fs::File;
use std::io::BufWriter;
use std::path::Path;
use tracing::info;

pub fn run(args: BatchArgs, config: &AppConfig) -> Result<()> {
    let overrides = RecipeOverrides::default();
    let recipes = args
        .recipes
        .iter()
        .map(|path| sheets::load_recipe(path, &overrides, &config.recipe_defaults))
        .collect::<Result<Vec<_>>>()?;
    info!("Loaded {} recipe sheet(s) for batch evaluation.", recipes.len());

    let progress_handler = CliProgressHandler::new();
    let reporter = ProgressReporter::with_callback(progress_handler.get_callback());
    let results = batch::run(&recipes, &reporter);

    let entries: Vec<BatchEntry> = args
        .recipes
        .iter()
        .zip(results)
        .map(|(path, metrics)| BatchEntry {
            label: entry_label(path),
            metrics,
        })
        .collect();

    for entry in &entries {
        println!("{}", format_entry(entry));
    }

    if let Some(report_path) = &args.report {
        let file = File::create(report_path)?;
        batch::write_report(&entries, BufWriter::new(file))?;
        info!("CSV report written to {:?}", report_path);
        println!("Report written to {}", report_path.display());
    }

    Ok(())
}

fn entry_label(path: &Path) -> String {
    path.file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

fn format_entry(entry: &BatchEntry) -> String {
    let m = &entry.metrics;
    format!(
        "{:<20} OG {:>5}  BG {:>5}  IBU {:>5}  FG {:>5}  ABV {:>6}",
        entry.label,
        format_gravity(m.original_gravity),
        format_gravity(m.boil_gravity),
        format_bitterness(m.bitterness_ibu),
        format_gravity(m.final_gravity),
        format_abv(m.alcohol_by_volume_percent),
    )
}
