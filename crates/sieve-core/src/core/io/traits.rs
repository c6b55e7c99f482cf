use crate::core::models::structure::Structure;
use std::error::Error;
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;

/// Defines the interface for reading molecular structure file formats.
///
/// Implementors handle format-specific parsing and produce the neutral
/// [`Structure`] tree the filtering engine consumes. The entry identifier is
/// supplied by the caller (typically derived from the file name) because the
/// formats this pipeline reads do not carry a reliable one themselves.
pub trait StructureFile {
    /// The error type for parse and I/O failures.
    type Error: Error + From<io::Error>;

    /// Reads one structure entry from a buffered reader.
    ///
    /// # Errors
    ///
    /// Returns an error if the content is not parseable as this format or if
    /// the underlying reader fails.
    fn read_from(id: &str, reader: &mut impl BufRead) -> Result<Structure, Self::Error>;

    /// Reads one structure entry from a file path.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be opened or parsing fails.
    fn read_from_path<P: AsRef<Path>>(id: &str, path: P) -> Result<Structure, Self::Error> {
        let file = File::open(path)?;
        let mut reader = BufReader::new(file);
        Self::read_from(id, &mut reader)
    }
}
