//! Data structures for the topology held in a LAMMPS data file.
//!
//! Records are plain value types mirroring one line of their section; a
//! [`document::Document`] groups the four supported sections with the
//! verbatim file header.

pub mod atom;
pub mod document;
pub mod section;
pub mod topology;
