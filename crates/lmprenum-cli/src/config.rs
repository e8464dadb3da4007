use crate::cli::Cli;
use crate::error::{CliError, Result};
use lmprenum::engine::config::{RenumberConfig, VelocityPolicy};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use tracing::debug;

#[derive(Deserialize, Debug, Default)]
#[serde(deny_unknown_fields)]
struct PartialRenumberSection {
    velocities: Option<VelocityPolicy>,
}

/// Settings read from a TOML configuration file; every key is optional.
#[derive(Deserialize, Debug, Default)]
#[serde(deny_unknown_fields)]
pub struct PartialRunConfig {
    input: Option<PathBuf>,
    output: Option<PathBuf>,
    renumber: Option<PartialRenumberSection>,
}

/// Fully resolved inputs for one renumbering run.
#[derive(Debug, Clone, PartialEq)]
pub struct RunSettings {
    pub input: PathBuf,
    pub output: PathBuf,
    pub renumber: RenumberConfig,
}

impl PartialRunConfig {
    /// Loads a configuration file. Relative paths inside it are resolved
    /// against the directory that contains the file.
    pub fn from_file(path: &Path) -> Result<Self> {
        debug!("Loading configuration from file: {:?}", path);
        let content = std::fs::read_to_string(path).map_err(|e| {
            CliError::Config(format!(
                "Cannot read configuration file '{}': {}",
                path.display(),
                e
            ))
        })?;
        let mut partial = Self::from_toml_str(&content).map_err(|source| CliError::FileParsing {
            path: path.to_path_buf(),
            source: source.into(),
        })?;

        if let Some(base) = path.parent() {
            partial.input = partial.input.map(|p| resolve_relative(base, p));
            partial.output = partial.output.map(|p| resolve_relative(base, p));
        }
        Ok(partial)
    }

    pub fn from_toml_str(content: &str) -> std::result::Result<Self, toml::de::Error> {
        toml::from_str(content)
    }

    /// Combines the file values with command-line arguments, which win.
    pub fn merge_with_cli(self, cli: &Cli) -> Result<RunSettings> {
        let input = cli
            .input
            .clone()
            .or(self.input)
            .ok_or_else(|| CliError::Config("input file not specified".to_string()))?;
        let output = cli
            .output
            .clone()
            .or(self.output)
            .ok_or_else(|| CliError::Config("output file not specified".to_string()))?;

        let file_policy = self.renumber.unwrap_or_default().velocities;
        let velocity_policy = cli
            .velocities
            .map(VelocityPolicy::from)
            .or(file_policy)
            .unwrap_or_default();

        Ok(RunSettings {
            input,
            output,
            renumber: RenumberConfig::new(velocity_policy),
        })
    }
}

fn resolve_relative(base: &Path, path: PathBuf) -> PathBuf {
    if path.is_relative() && !base.as_os_str().is_empty() {
        base.join(path)
    } else {
        path
    }
}

/// Builds the run settings from the command line and its optional config file.
pub fn resolve_settings(cli: &Cli) -> Result<RunSettings> {
    let partial = match &cli.config {
        Some(path) => PartialRunConfig::from_file(path)?,
        None => PartialRunConfig::default(),
    };
    partial.merge_with_cli(cli)
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use std::fs;

    fn cli(args: &[&str]) -> Cli {
        let mut argv = vec!["lmprenum"];
        argv.extend_from_slice(args);
        Cli::try_parse_from(argv).unwrap()
    }

    #[test]
    fn cli_paths_alone_are_sufficient() {
        let settings = resolve_settings(&cli(&["-i", "a.data", "-o", "b.data"])).unwrap();
        assert_eq!(settings.input, PathBuf::from("a.data"));
        assert_eq!(settings.output, PathBuf::from("b.data"));
        assert_eq!(settings.renumber.velocity_policy, VelocityPolicy::Independent);
    }

    #[test]
    fn missing_input_is_config_error() {
        let err = resolve_settings(&cli(&["-o", "b.data"])).unwrap_err();
        assert!(matches!(&err, CliError::Config(msg) if msg == "input file not specified"));
    }

    #[test]
    fn missing_output_is_config_error() {
        let err = resolve_settings(&cli(&["-i", "a.data"])).unwrap_err();
        assert!(matches!(&err, CliError::Config(msg) if msg == "output file not specified"));
        assert_eq!(
            err.to_string(),
            "Configuration error: output file not specified"
        );
    }

    #[test]
    fn parses_full_config_file() {
        let partial = PartialRunConfig::from_toml_str(
            r#"
            input = "in.data"
            output = "out.data"

            [renumber]
            velocities = "follow-atoms"
            "#,
        )
        .unwrap();
        let settings = partial.merge_with_cli(&cli(&[])).unwrap();
        assert_eq!(settings.input, PathBuf::from("in.data"));
        assert_eq!(settings.output, PathBuf::from("out.data"));
        assert_eq!(settings.renumber.velocity_policy, VelocityPolicy::FollowAtoms);
    }

    #[test]
    fn cli_values_override_config_file() {
        let partial = PartialRunConfig::from_toml_str(
            r#"
            input = "in.data"
            output = "out.data"

            [renumber]
            velocities = "follow-atoms"
            "#,
        )
        .unwrap();
        let settings = partial
            .merge_with_cli(&cli(&["-o", "other.data", "--velocities", "independent"]))
            .unwrap();
        assert_eq!(settings.input, PathBuf::from("in.data"));
        assert_eq!(settings.output, PathBuf::from("other.data"));
        assert_eq!(settings.renumber.velocity_policy, VelocityPolicy::Independent);
    }

    #[test]
    fn unknown_keys_are_rejected() {
        assert!(PartialRunConfig::from_toml_str("inptu = \"typo.data\"").is_err());
        assert!(PartialRunConfig::from_toml_str("[renumber]\nsort = true").is_err());
    }

    #[test]
    fn unknown_policy_value_is_rejected() {
        assert!(PartialRunConfig::from_toml_str("[renumber]\nvelocities = \"mapped\"").is_err());
    }

    #[test]
    fn config_file_paths_resolve_against_its_directory() {
        let dir = tempfile::tempdir().unwrap();
        let config_path = dir.path().join("renumber.toml");
        fs::write(
            &config_path,
            "input = \"in.data\"\noutput = \"/abs/out.data\"\n",
        )
        .unwrap();

        let cli = cli(&["-c", config_path.to_str().unwrap()]);
        let settings = resolve_settings(&cli).unwrap();

        assert_eq!(settings.input, dir.path().join("in.data"));
        assert_eq!(settings.output, PathBuf::from("/abs/out.data"));
    }

    #[test]
    fn invalid_config_file_reports_path() {
        let dir = tempfile::tempdir().unwrap();
        let config_path = dir.path().join("broken.toml");
        fs::write(&config_path, "input = [").unwrap();

        let err = PartialRunConfig::from_file(&config_path).unwrap_err();
        assert!(matches!(&err, CliError::FileParsing { path, .. } if path == &config_path));
    }

    #[test]
    fn missing_config_file_is_config_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = PartialRunConfig::from_file(&dir.path().join("absent.toml")).unwrap_err();
        assert!(matches!(err, CliError::Config(_)));
    }
}
