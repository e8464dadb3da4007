//! Provides input/output functionality for LAMMPS data files.
//!
//! Reading and writing go through the [`traits::TopologyFile`] interface,
//! implemented by [`data::DataFile`]. Line layouts are described once per
//! record type in [`schema`], which the parser and serializer share.

pub mod data;
pub mod format;
pub mod schema;
pub mod tokens;
pub mod traits;
