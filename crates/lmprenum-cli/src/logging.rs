use crate::error::Result;
use std::fs::File;
use std::io::IsTerminal;
use std::path::Path;
use tracing_subscriber::{filter::LevelFilter, fmt, prelude::*};

/// Maps the `-v`/`-q` flags onto a global level filter.
pub fn level_filter(verbosity: u8, quiet: bool) -> LevelFilter {
    if quiet {
        return LevelFilter::OFF;
    }
    match verbosity {
        0 => LevelFilter::WARN,
        1 => LevelFilter::INFO,
        2 => LevelFilter::DEBUG,
        _ => LevelFilter::TRACE,
    }
}

/// Installs the global subscriber: compact stderr output, plus a plain-text
/// file layer when `log_file` is given.
///
/// The log file is created before anything is installed, so a bad path
/// leaves the process without a subscriber. Calling this a second time fails.
pub fn setup_logging(verbosity: u8, quiet: bool, log_file: Option<&Path>) -> Result<()> {
    let file_layer = log_file.map(File::create).transpose()?.map(|file| {
        fmt::layer()
            .with_writer(file)
            .with_ansi(false)
            .with_thread_ids(true)
            .with_target(true)
    });

    let stderr_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_ansi(std::io::stderr().is_terminal())
        .with_target(false)
        .compact();

    tracing_subscriber::registry()
        .with(level_filter(verbosity, quiet))
        .with(stderr_layer)
        .with(file_layer)
        .try_init()
        .map_err(anyhow::Error::from)?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CliError;
    use serial_test::serial;
    use tracing::debug;

    #[test]
    fn verbosity_maps_to_levels() {
        assert_eq!(level_filter(0, false), LevelFilter::WARN);
        assert_eq!(level_filter(1, false), LevelFilter::INFO);
        assert_eq!(level_filter(2, false), LevelFilter::DEBUG);
        assert_eq!(level_filter(3, false), LevelFilter::TRACE);
        assert_eq!(level_filter(9, false), LevelFilter::TRACE);
    }

    #[test]
    fn quiet_disables_all_output() {
        assert_eq!(level_filter(0, true), LevelFilter::OFF);
        assert_eq!(level_filter(2, true), LevelFilter::OFF);
    }

    #[test]
    #[serial]
    fn file_layer_writes_plain_text_with_thread_ids() {
        let temp_dir = tempfile::tempdir().unwrap();
        let log_path = temp_dir.path().join("renumber.log");

        let file = File::create(&log_path).unwrap();
        let file_layer = fmt::layer()
            .with_writer(file)
            .with_ansi(false)
            .with_thread_ids(true);
        let subscriber = tracing_subscriber::registry().with(file_layer);

        tracing::subscriber::with_default(subscriber, || {
            debug!("Renumbered 3 atoms.");
        });

        let content = std::fs::read_to_string(&log_path).unwrap();
        assert!(content.contains("Renumbered 3 atoms."));
        assert!(content.contains("DEBUG"));
        assert!(content.contains("ThreadId"));
    }

    #[test]
    #[serial]
    fn uncreatable_log_file_is_an_io_error() {
        let temp_dir = tempfile::tempdir().unwrap();
        let log_path = temp_dir.path().join("no_such_dir").join("renumber.log");

        let result = setup_logging(1, false, Some(log_path.as_path()));

        assert!(matches!(result, Err(CliError::Io(_))));
        assert!(!log_path.exists());
    }

    #[test]
    #[serial]
    fn second_installation_is_rejected() {
        let _ = setup_logging(0, true, None);
        let result = setup_logging(0, true, None);
        assert!(matches!(result, Err(CliError::Other(_))));
    }
}
