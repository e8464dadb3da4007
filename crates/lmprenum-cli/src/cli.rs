use clap::{Parser, ValueEnum};
use lmprenum::engine::config::VelocityPolicy;
use std::path::PathBuf;

const HELP_TEMPLATE: &str = "\
{before-help}{name} {version}
{about-with-newline}
{usage-heading} {usage}

{all-args}{after-help}
";

#[derive(Parser, Debug)]
#[command(
    name = "lmprenum",
    version,
    about = "lmprenum - Renumber the atoms of a LAMMPS data file into contiguous, sorted IDs and remap velocities, bonds and angles to match.",
    help_template = HELP_TEMPLATE,
)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Path to the input LAMMPS data file.
    #[arg(short, long, value_name = "PATH")]
    pub input: Option<PathBuf>,

    /// Path for the renumbered output data file.
    #[arg(short, long, value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// Path to an optional configuration file in TOML format.
    /// Command-line arguments take precedence over its values.
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// How velocity entries are renumbered.
    /// Defaults to `independent`, which numbers velocities by their own order.
    #[arg(long, value_enum, value_name = "POLICY")]
    pub velocities: Option<VelocityPolicyArg>,

    /// Increase verbosity level (-v for INFO, -vv for DEBUG, -vvv for TRACE)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress all log output
    #[arg(short, long, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Write logs to a specified file in addition to the console output
    #[arg(long, value_name = "PATH")]
    pub log_file: Option<PathBuf>,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum VelocityPolicyArg {
    /// Sort velocities by atom ID and number them 1..M.
    Independent,
    /// Map each velocity's atom ID through the atom renumbering table.
    FollowAtoms,
}

impl From<VelocityPolicyArg> for VelocityPolicy {
    fn from(arg: VelocityPolicyArg) -> Self {
        match arg {
            VelocityPolicyArg::Independent => VelocityPolicy::Independent,
            VelocityPolicyArg::FollowAtoms => VelocityPolicy::FollowAtoms,
        }
    }
}
