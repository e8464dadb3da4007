//! # Workflows Module
//!
//! End-to-end pipelines built from the [`crate::core`] reader and serializer
//! and the [`crate::engine`] transformation.
//!
//! - **Renumber Workflow** ([`renumber`]) - Read a data file, renumber its
//!   atoms, remap references and write the result

pub mod renumber;
