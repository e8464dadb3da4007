use super::atom::{AtomRecord, VelocityRecord};
use super::section::Section;
use super::topology::{AngleRecord, BondRecord};

/// The in-memory form of a data file.
///
/// A `Document` is built once by the reader, renumbered in place and then
/// handed to the serializer. The header holds the raw bytes of every line
/// that preceded the `Atoms` section, each terminated by `\n`, and is written
/// back untouched whether or not it is valid UTF-8.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Document {
    pub header: Vec<u8>,
    pub atoms: Section<AtomRecord>,
    pub velocities: Section<VelocityRecord>,
    pub bonds: Section<BondRecord>,
    pub angles: Section<AngleRecord>,
}

impl Document {
    pub fn new(header: impl Into<Vec<u8>>) -> Self {
        Self {
            header: header.into(),
            ..Default::default()
        }
    }
}
