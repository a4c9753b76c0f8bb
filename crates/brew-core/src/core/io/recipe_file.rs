use super::sheet::RecipeSheet;
use super::traits::RecipeFile;
use std::io::{BufRead, Write};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum RecipeFileError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("TOML parsing error: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("TOML serialization error: {0}")]
    Serialize(#[from] toml::ser::Error),
}

/// Recipe sheets stored as TOML with kebab-case keys.
pub struct TomlRecipeFile;

impl RecipeFile for TomlRecipeFile {
    type Error = RecipeFileError;

    fn read_from(reader: &mut impl BufRead) -> Result<RecipeSheet, Self::Error> {
        let mut content = String::new();
        reader.read_to_string(&mut content)?;
        Ok(toml::from_str(&content)?)
    }

    fn write_to(sheet: &RecipeSheet, writer: &mut impl Write) -> Result<(), Self::Error> {
        let content = toml::to_string_pretty(sheet)?;
        writer.write_all(content.as_bytes())?;
        Ok(())
    }
}
