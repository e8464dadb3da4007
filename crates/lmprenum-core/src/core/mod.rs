//! # Core Module
//!
//! The stateless foundation of the crate: the record-level data model of a
//! LAMMPS data file and the I/O layer that reads and writes it.
//!
//! - **Data Model** ([`models`]) - Atom, velocity, bond and angle records,
//!   generic sections and the document that groups them
//! - **File I/O** ([`io`]) - Token coercion, schema-driven section parsing
//!   and serialization of whole documents

pub mod io;
pub mod models;
