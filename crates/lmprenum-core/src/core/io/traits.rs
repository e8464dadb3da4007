use crate::core::models::document::Document;
use std::error::Error;
use std::fs::File;
use std::io::{self, BufRead, BufReader, BufWriter, Write};
use std::path::Path;

/// Defines the interface for reading and writing topology file formats.
///
/// Implementors handle format-specific parsing and serialization against
/// buffered streams; the path-based helpers open, buffer and release the
/// file handle around those calls.
pub trait TopologyFile {
    /// The error type for I/O operations.
    type Error: Error + From<io::Error>;

    /// Reads a document from a buffered reader.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying reader fails.
    fn read_from(reader: &mut impl BufRead) -> Result<Document, Self::Error>;

    /// Writes a document to a writer.
    ///
    /// # Errors
    ///
    /// Returns an error if writing to the underlying writer fails.
    fn write_to(document: &Document, writer: &mut impl Write) -> Result<(), Self::Error>;

    /// Reads a document from a file path.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be opened or read.
    fn read_from_path<P: AsRef<Path>>(path: P) -> Result<Document, Self::Error> {
        let file = File::open(path)?;
        let mut reader = BufReader::new(file);
        Self::read_from(&mut reader)
    }

    /// Writes a document to a file path, creating or truncating it.
    ///
    /// The buffered writer is flushed before returning so that late write
    /// failures are reported instead of lost on drop.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be created, written or flushed.
    fn write_to_path<P: AsRef<Path>>(document: &Document, path: P) -> Result<(), Self::Error> {
        let file = File::create(path)?;
        let mut writer = BufWriter::new(file);
        Self::write_to(document, &mut writer)?;
        writer.flush()?;
        Ok(())
    }
}
