use super::schema::Record;
use super::traits::TopologyFile;
use crate::core::models::document::Document;
use crate::core::models::section::{Section, SectionKind};
use std::fmt;
use std::io::{self, BufRead, Write};
use thiserror::Error;
use tracing::trace;

#[derive(Debug, Error)]
pub enum DataFileError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

/// The LAMMPS data file format, restricted to the `Atoms`, `Velocities`,
/// `Bonds` and `Angles` sections.
///
/// Reading is lossy: lines whose token count does not match the
/// section schema are dropped, unparsable numbers become zero, and anything
/// outside the four sections (other than the leading header) is ignored.
/// Only failures of the underlying stream are reported as errors.
pub struct DataFile;

impl TopologyFile for DataFile {
    type Error = DataFileError;

    fn read_from(reader: &mut impl BufRead) -> Result<Document, Self::Error> {
        let mut lines = RawLines { reader };

        let header = read_header(&mut lines)?;
        let atoms = read_section(&mut lines)?;
        let velocities = read_section(&mut lines)?;
        let bonds = read_section(&mut lines)?;
        let angles = read_section(&mut lines)?;

        Ok(Document {
            header,
            atoms,
            velocities,
            bonds,
            angles,
        })
    }

    fn write_to(document: &Document, writer: &mut impl Write) -> Result<(), Self::Error> {
        writer.write_all(&document.header)?;
        write_section(&document.atoms, writer)?;
        write_section(&document.velocities, writer)?;
        write_section(&document.bonds, writer)?;
        write_section(&document.angles, writer)?;
        Ok(())
    }
}

/// Byte lines of a stream with the trailing `\n` or `\r\n` removed.
///
/// Unlike [`BufRead::lines`], no UTF-8 decoding happens here, so header and
/// note text in any encoding survives the round trip.
struct RawLines<B> {
    reader: B,
}

impl<B: BufRead> Iterator for RawLines<B> {
    type Item = io::Result<Vec<u8>>;

    fn next(&mut self) -> Option<Self::Item> {
        let mut line = Vec::new();
        match self.reader.read_until(b'\n', &mut line) {
            Ok(0) => None,
            Ok(_) => {
                if line.last() == Some(&b'\n') {
                    line.pop();
                    if line.last() == Some(&b'\r') {
                        line.pop();
                    }
                }
                Some(Ok(line))
            }
            Err(e) => Some(Err(e)),
        }
    }
}

fn contains_keyword(line: &[u8], keyword: &str) -> bool {
    line.windows(keyword.len())
        .any(|window| window == keyword.as_bytes())
}

/// Collects every line up to the first one mentioning `Atoms`.
///
/// The `Atoms` line itself is consumed and not stored; the serializer writes
/// its own section title.
fn read_header<I>(lines: &mut I) -> io::Result<Vec<u8>>
where
    I: Iterator<Item = io::Result<Vec<u8>>>,
{
    let marker = SectionKind::Atoms.keyword();
    let mut header = Vec::new();
    for line in lines {
        let line = line?;
        if contains_keyword(&line, marker) {
            break;
        }
        header.extend_from_slice(&line);
        header.push(b'\n');
    }
    Ok(header)
}

/// Reads the body of one section, stopping after the line that announces the
/// next section or at end of input.
fn read_section<R, I>(lines: &mut I) -> io::Result<Section<R>>
where
    R: Record,
    I: Iterator<Item = io::Result<Vec<u8>>>,
{
    let terminator = R::SECTION.next().map(SectionKind::keyword);
    let mut section = Section::default();

    for line in lines {
        let line = line?;
        if line.is_empty() {
            continue;
        }
        if line.contains(&b'#') {
            section.note = line;
            continue;
        }
        if terminator.is_some_and(|keyword| contains_keyword(&line, keyword)) {
            break;
        }
        // Stray bytes can only spoil a token, which then coerces to zero.
        let text = String::from_utf8_lossy(&line);
        match R::parse_line(&text) {
            Some(record) => section.records.push(record),
            None => trace!(
                section = %R::SECTION,
                expected = R::SCHEMA.len(),
                "Discarding line with unexpected token count: {:?}",
                text
            ),
        }
    }

    trace!(
        section = %R::SECTION,
        records = section.records.len(),
        "Finished reading section."
    );
    Ok(section)
}

fn write_section<R: Record>(section: &Section<R>, writer: &mut impl Write) -> io::Result<()> {
    writeln!(writer, "{}", R::SECTION.title())?;
    writeln!(writer)?;
    writer.write_all(&section.note)?;
    writeln!(writer)?;
    for record in &section.records {
        writeln!(writer, "{}", record.render_line())?;
    }
    writeln!(writer)?;
    Ok(())
}

impl fmt::Display for Document {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut buffer = Vec::new();
        DataFile::write_to(self, &mut buffer).map_err(|_| fmt::Error)?;
        f.write_str(&String::from_utf8_lossy(&buffer))
    }
}
