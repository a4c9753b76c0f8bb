use crate::store::StoreError;
use brewcalc::core::io::recipe_file::RecipeFileError;
use brewcalc::workflows::batch::ReportError;
use std::path::PathBuf;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, CliError>;

#[derive(Debug, Error)]
pub enum CliError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Recipe store error: {0}")]
    Store(#[from] StoreError),

    #[error("Recipe file error: {0}")]
    RecipeFile(#[from] RecipeFileError),

    #[error("Failed to write report: {0}")]
    Report(#[from] ReportError),

    #[error("Failed to parse file '{path}': {source}", path = path.display())]
    FileParsing {
        path: PathBuf,
        #[source]
        source: anyhow::Error,
    },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid argument: {0}")]
    Argument(String),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}
