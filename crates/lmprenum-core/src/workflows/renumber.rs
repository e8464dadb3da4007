use crate::core::io::data::{DataFile, DataFileError};
use crate::core::io::traits::TopologyFile;
use crate::engine::config::RenumberConfig;
use crate::engine::renumber::{RenumberReport, renumber};
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{info, instrument};

#[derive(Debug, Error)]
pub enum WorkflowError {
    #[error("Failed to read data file '{}': {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: DataFileError,
    },

    #[error("Failed to write data file '{}': {source}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: DataFileError,
    },
}

/// Reads `input`, renumbers it and writes the result to `output`.
///
/// The input handle is closed before the output is created, so `input` and
/// `output` may name the same file.
#[instrument(skip_all, name = "renumber_workflow")]
pub fn run(
    input: impl AsRef<Path>,
    output: impl AsRef<Path>,
    config: &RenumberConfig,
) -> Result<RenumberReport, WorkflowError> {
    let input = input.as_ref();
    let output = output.as_ref();

    info!("Reading data file from {:?}", input);
    let mut document = DataFile::read_from_path(input).map_err(|source| WorkflowError::Read {
        path: input.to_path_buf(),
        source,
    })?;

    let report = renumber(&mut document, config);
    info!(
        "Renumbered {} atoms, {} velocities, {} bonds and {} angles.",
        report.atoms, report.velocities, report.bonds, report.angles
    );

    info!("Writing renumbered data file to {:?}", output);
    DataFile::write_to_path(&document, output).map_err(|source| WorkflowError::Write {
        path: output.to_path_buf(),
        source,
    })?;

    Ok(report)
}
