use crate::core::display::{format_abv, format_bitterness, format_gravity};
use crate::core::models::metrics::RecipeMetrics;
use crate::core::models::recipe::Recipe;
use crate::engine::calculator::calculate;
use crate::engine::progress::{Progress, ProgressReporter};
use rayon::prelude::*;
use std::io::Write;
use thiserror::Error;
use tracing::{info, instrument};

const REPORT_HEADER: [&str; 6] = ["recipe", "og", "boil-gravity", "ibu", "fg", "abv"];

#[derive(Debug, Error)]
pub enum ReportError {
    #[error("CSV writing error: {0}")]
    Csv(#[from] csv::Error),
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

#[derive(Debug, Clone)]
pub struct BatchEntry {
    pub label: String,
    pub metrics: RecipeMetrics,
}

/// Calculates every recipe in parallel, returning metrics in input order.
#[instrument(skip_all, name = "batch_workflow", fields(recipes = recipes.len()))]
pub fn run(recipes: &[Recipe], reporter: &ProgressReporter) -> Vec<RecipeMetrics> {
    reporter.report(Progress::TaskStart {
        total_steps: recipes.len() as u64,
    });

    let results: Vec<RecipeMetrics> = recipes
        .par_iter()
        .map(|recipe| {
            let metrics = calculate(recipe);
            reporter.report(Progress::TaskIncrement);
            metrics
        })
        .collect();

    reporter.report(Progress::TaskFinish);

    let incomplete = results.iter().filter(|m| !m.is_fully_computable()).count();
    if incomplete > 0 {
        reporter.report(Progress::Message(format!(
            "{} of {} recipe(s) have metrics that could not be computed.",
            incomplete,
            results.len()
        )));
    }
    info!(
        "Batch complete: {} recipe(s), {} incomplete.",
        results.len(),
        incomplete
    );
    results
}

pub fn write_report<W: Write>(entries: &[BatchEntry], writer: W) -> Result<(), ReportError> {
    let mut csv_writer = csv::Writer::from_writer(writer);
    csv_writer.write_record(REPORT_HEADER)?;
    for entry in entries {
        let m = &entry.metrics;
        let row: [&str; 6] = [
            &entry.label,
            &format_gravity(m.original_gravity),
            &format_gravity(m.boil_gravity),
            &format_bitterness(m.bitterness_ibu),
            &format_gravity(m.final_gravity),
            &format_abv(m.alcohol_by_volume_percent),
        ];
        csv_writer.write_record(row)?;
    }
    csv_writer.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::models::recipe::{FermentableAddition, HopAddition};
    use std::sync::atomic::{AtomicU64, Ordering};

    fn recipe_with_grain(kg: f64) -> Recipe {
        Recipe::new(20.0, 27.0, 0.72, 0.75)
            .with_fermentable(FermentableAddition::new("Pale", kg, 37.0))
            .with_hop(HopAddition::new("Cascade", 25.0, 0.06, 60.0))
    }

    #[test]
    fn run_preserves_input_order() {
        let recipes: Vec<_> = (1..=50).map(|i| recipe_with_grain(i as f64 * 0.2)).collect();
        let results = run(&recipes, &ProgressReporter::new());

        assert_eq!(results.len(), recipes.len());
        for (recipe, metrics) in recipes.iter().zip(&results) {
            assert_eq!(*metrics, calculate(recipe));
        }
    }

    #[test]
    fn run_reports_one_increment_per_recipe() {
        let increments = AtomicU64::new(0);
        let total = AtomicU64::new(0);
        let reporter = ProgressReporter::with_callback(Box::new(|event| match event {
            Progress::TaskStart { total_steps } => total.store(total_steps, Ordering::SeqCst),
            Progress::TaskIncrement => {
                increments.fetch_add(1, Ordering::SeqCst);
            }
            _ => {}
        }));

        let recipes: Vec<_> = (1..=12).map(|i| recipe_with_grain(i as f64)).collect();
        run(&recipes, &reporter);
        drop(reporter);

        assert_eq!(total.load(Ordering::SeqCst), 12);
        assert_eq!(increments.load(Ordering::SeqCst), 12);
    }

    #[test]
    fn run_on_empty_input_returns_nothing() {
        assert!(run(&[], &ProgressReporter::new()).is_empty());
    }

    #[test]
    fn write_report_renders_formatted_rows() {
        let mut broken = recipe_with_grain(4.5);
        broken.attenuation_fraction = 0.0;
        let entries = vec![
            BatchEntry {
                label: "pale-ale".to_string(),
                metrics: calculate(&recipe_with_grain(4.5)),
            },
            BatchEntry {
                label: "no-yeast".to_string(),
                metrics: calculate(&broken),
            },
        ];

        let mut buffer = Vec::new();
        write_report(&entries, &mut buffer).unwrap();
        let text = String::from_utf8(buffer).unwrap();
        let lines: Vec<_> = text.lines().collect();

        assert_eq!(lines[0], "recipe,og,boil-gravity,ibu,fg,abv");
        assert_eq!(lines[1], "pale-ale,1.050,1.037,1.9,1.013,4.9 %");
        assert_eq!(lines[2], "no-yeast,1.050,1.037,1.9,—,—");
    }
}
