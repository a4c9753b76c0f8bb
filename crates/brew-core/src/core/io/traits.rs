use super::sheet::RecipeSheet;
use std::error::Error;
use std::fs::File;
use std::io::{self, BufRead, BufReader, BufWriter, Write};
use std::path::Path;

/// Defines the interface for reading and writing recipe sheet formats.
///
/// Implementors handle format-specific parsing and serialization; the path helpers
/// take care of opening and buffering files.
pub trait RecipeFile {
    /// The error type for I/O and format operations.
    type Error: Error + From<io::Error>;

    /// Reads a recipe sheet from a buffered reader.
    ///
    /// # Errors
    ///
    /// Returns an error if reading fails or the content is not a valid sheet.
    fn read_from(reader: &mut impl BufRead) -> Result<RecipeSheet, Self::Error>;

    /// Writes a recipe sheet to a writer.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization or writing fails.
    fn write_to(sheet: &RecipeSheet, writer: &mut impl Write) -> Result<(), Self::Error>;

    /// Reads a recipe sheet from a file path.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be opened or parsing fails.
    fn read_from_path<P: AsRef<Path>>(path: P) -> Result<RecipeSheet, Self::Error> {
        let file = File::open(path)?;
        let mut reader = BufReader::new(file);
        Self::read_from(&mut reader)
    }

    /// Writes a recipe sheet to a file path, creating or truncating it.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be created or writing fails.
    fn write_to_path<P: AsRef<Path>>(sheet: &RecipeSheet, path: P) -> Result<(), Self::Error> {
        let file = File::create(path)?;
        let mut writer = BufWriter::new(file);
        Self::write_to(sheet, &mut writer)?;
        writer.flush()?;
        Ok(())
    }
}
