//! # lmprenum
//!
//! Renumbers the atoms of a LAMMPS data file so that IDs are contiguous,
//! 1-based and sorted, rewriting every reference to them along the way.
//!
//! ## Architecture
//!
//! - **[`core`]: The Foundation.** Record types for the `Atoms`, `Velocities`,
//!   `Bonds` and `Angles` sections, plus the reader and serializer for the
//!   fixed-schema text format.
//!
//! - **[`engine`]: The Transformation.** Sorts atoms, builds the old-to-new ID
//!   table and remaps bond and angle endpoints through it, in place.
//!
//! - **[`workflows`]: The Public API.** File-to-file pipelines tying the
//!   reader, engine and serializer together.
//!
//! ```no_run
//! use lmprenum::engine::config::RenumberConfig;
//! use lmprenum::workflows;
//!
//! let report = workflows::renumber::run("in.data", "out.data", &RenumberConfig::default())?;
//! println!("{} atoms renumbered", report.atoms);
//! # Ok::<(), lmprenum::workflows::renumber::WorkflowError>(())
//! ```

pub mod core;
pub mod engine;
pub mod workflows;
