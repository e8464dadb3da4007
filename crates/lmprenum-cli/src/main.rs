mod cli;
mod commands;
mod config;
mod error;
mod logging;

use crate::cli::Cli;
use crate::config::RunSettings;
use crate::error::{CliError, Result};
use clap::Parser;
use tracing::{debug, error, info};

fn main() {
    if let Err(e) = run_app() {
        debug!("Command failed: {:?}", e);
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run_app() -> Result<()> {
    let cli = Cli::parse();
    let settings = prepare(&cli)?;

    let (panic_hook, eyre_hook) = color_eyre::config::HookBuilder::default().into_hooks();
    eyre_hook.install().map_err(|e| CliError::Other(e.into()))?;
    std::panic::set_hook(Box::new(move |pi| {
        error!("{}", panic_hook.panic_report(pi));
    }));

    info!("lmprenum v{} starting up.", env!("CARGO_PKG_VERSION"));
    debug!("Full CLI arguments parsed: {:?}", &cli);

    commands::renumber::run(&settings)?;

    info!("Renumbering completed successfully.");
    Ok(())
}

/// Resolves the run settings, then installs logging.
///
/// Missing input or output paths are reported before the log file is created.
fn prepare(cli: &Cli) -> Result<RunSettings> {
    let settings = config::resolve_settings(cli)?;
    logging::setup_logging(cli.verbose, cli.quiet, cli.log_file.as_deref())?;
    Ok(settings)
}
