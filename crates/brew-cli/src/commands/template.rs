use crate::cli::TemplateArgs;
use crate::config::defaults::starter_recipe;
use crate::config::models::AppConfig;
use crate::error::Result;
use brewcalc::core::io::recipe_file::TomlRecipeFile;
use brewcalc::core::io::sheet::RecipeSheet;
use brewcalc::core::io::traits::RecipeFile;
use std::io::{self, Write};
use tracing::info;

pub fn run(args: TemplateArgs, config: &AppConfig) -> Result<()> {
    let sheet = RecipeSheet::from_recipe(&starter_recipe(&config.recipe_defaults));

    match args.output {
        Some(path) => {
            TomlRecipeFile::write_to_path(&sheet, &path)?;
            info!("Template written to {:?}", path);
            println!("Template written to {}", path.display());
        }
        None => {
            let mut stdout = io::stdout().lock();
            TomlRecipeFile::write_to(&sheet, &mut stdout)?;
            stdout.flush()?;
        }
    }
    Ok(())
}
