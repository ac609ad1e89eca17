use crate::core::models::pool::StructurePool;
use std::error::Error;
use std::fs::File;
use std::io::{self, BufRead, BufReader, Cursor};
use std::path::Path;

/// Defines the interface for reading structure pools from molecular file
/// formats.
///
/// Implementors handle format-specific parsing; the provided methods cover
/// the common entry points (file path, in-memory block) so callers only
/// interact with the trait.
pub trait StructureFile {
    /// The error type for I/O operations.
    type Error: Error + From<io::Error>;

    /// Reads a structure pool from a buffered reader.
    ///
    /// # Errors
    ///
    /// Returns an error if parsing fails or I/O operations encounter issues.
    fn read_from(reader: &mut impl BufRead) -> Result<StructurePool, Self::Error>;

    /// Reads a structure pool from a file path.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be opened or parsing fails.
    fn read_from_path<P: AsRef<Path>>(path: P) -> Result<StructurePool, Self::Error> {
        let file = File::open(path)?;
        let mut reader = BufReader::new(file);
        Self::read_from(&mut reader)
    }

    /// Reads a structure pool from an in-memory text block, as submitted by a
    /// front end.
    ///
    /// # Errors
    ///
    /// Returns an error if parsing fails.
    fn read_from_str(block: &str) -> Result<StructurePool, Self::Error> {
        let mut reader = Cursor::new(block.as_bytes());
        Self::read_from(&mut reader)
    }
}
