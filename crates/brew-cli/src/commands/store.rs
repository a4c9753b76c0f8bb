use crate::cli::{RecipeOverrides, StoreArgs, StoreCommands};
use crate::commands::calc::summary_line;
use crate::config::defaults::starter_recipe;
use crate::config::models::AppConfig;
use crate::error::Result;
use crate::store::{DirectoryStore, KeyValueStore, RecipeRepository};
use crate::utils::sheets;
use brewcalc::core::display::MetricsReport;
use brewcalc::core::io::recipe_file::TomlRecipeFile;
use brewcalc::core::io::sheet::RecipeSheet;
use brewcalc::core::io::traits::RecipeFile;
use brewcalc::engine::calculator::calculate;
use std::path::{Path, PathBuf};
use tracing::info;

pub fn run(args: StoreArgs, config: &AppConfig) -> Result<()> {
    let mut repo = RecipeRepository::new(
        DirectoryStore::new(resolve_store_path(config)?),
        starter_recipe(&config.recipe_defaults),
    );

    match args.command {
        StoreCommands::Save { recipe, key } => {
            let key = key.unwrap_or_else(|| config.store_key.clone());
            handle_save(&mut repo, config, &recipe, &key)?;
        }
        StoreCommands::Load { key, export } => {
            let key = key.unwrap_or_else(|| config.store_key.clone());
            handle_load(&repo, &key, export.as_deref())?;
        }
        StoreCommands::List => {
            handle_list(&repo)?;
        }
        StoreCommands::Remove { key } => {
            repo.remove(&key)?;
            println!("Removed recipe '{}'.", key);
        }
        StoreCommands::Path => {
            println!("{}", repo.store().base_path().display());
        }
    }
    Ok(())
}

fn handle_save<S: KeyValueStore>(
    repo: &mut RecipeRepository<S>,
    config: &AppConfig,
    sheet_path: &Path,
    key: &str,
) -> Result<()> {
    let recipe = sheets::load_recipe(
        sheet_path,
        &RecipeOverrides::default(),
        &config.recipe_defaults,
    )?;
    repo.save(key, &recipe)?;
    println!("Saved {} as '{}'.", sheet_path.display(), key);
    Ok(())
}

fn handle_load<S: KeyValueStore>(
    repo: &RecipeRepository<S>,
    key: &str,
    export: Option<&Path>,
) -> Result<()> {
    let recipe = repo.load(key)?;
    let metrics = calculate(&recipe);

    println!("Recipe '{}': {}", key, summary_line(&recipe));
    print!("{}", MetricsReport::new(&metrics));

    if let Some(path) = export {
        TomlRecipeFile::write_to_path(&RecipeSheet::from_recipe(&recipe), path)?;
        info!("Exported recipe '{}' to {:?}", key, path);
        println!("Recipe sheet written to {}", path.display());
    }
    Ok(())
}

fn handle_list<S: KeyValueStore>(repo: &RecipeRepository<S>) -> Result<()> {
    let keys = repo.keys()?;
    if keys.is_empty() {
        println!("No recipes stored.");
    }
    for key in keys {
        println!("{}", key);
    }
    Ok(())
}

fn resolve_store_path(config: &AppConfig) -> Result<PathBuf> {
    match &config.store_path {
        Some(path) => Ok(path.clone()),
        None => Ok(DirectoryStore::default_path()?),
    }
}
