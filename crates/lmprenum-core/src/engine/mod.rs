//! # Engine Module
//!
//! The renumbering transformation applied to a parsed [`Document`].
//!
//! - **Configuration** ([`config`]) - Velocity handling policy
//! - **Mapping** ([`mapping`]) - The old-to-new atom ID table
//! - **Renumbering** ([`renumber`]) - Sorting, contiguous ID assignment and
//!   reference rewriting, all in place
//!
//! The engine performs no I/O; see [`crate::workflows`] for the file-level
//! pipeline.
//!
//! [`Document`]: crate::core::models::document::Document

pub mod config;
pub mod mapping;
pub mod renumber;
