use clap::{Args, Parser, Subcommand};
use hitscreen::workflows::screen::DEFAULT_THRESHOLD_ANGSTROM;
use std::path::PathBuf;

const HELP_TEMPLATE: &str = "\
{before-help}{name} {version}
{author-with-newline}{about-with-newline}
{usage-heading} {usage}

{all-args}{after-help}
";

#[derive(Parser, Debug)]
#[command(
    author = "Hitscreen Developers",
    version,
    about = "hitscreen - proximity screening of 3D molecular structures: list every structure in an SDF pool with an atom within a distance threshold of a target structure.",
    help_template = HELP_TEMPLATE,
)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Increase verbosity level (-v for INFO, -vv for DEBUG, -vvv for TRACE)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all log output except for errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Write logs to a specified file in addition to the console output
    #[arg(long, global = true, value_name = "PATH")]
    pub log_file: Option<PathBuf>,

    /// Set the number of threads for parallel screening.
    /// Defaults to the number of available logical cores.
    #[arg(short = 'j', long, global = true, value_name = "NUM")]
    pub threads: Option<usize>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Screen an SDF pool for structures close to a target structure.
    Screen(ScreenArgs),
}

/// Arguments for the `screen` subcommand.
#[derive(Args, Debug)]
pub struct ScreenArgs {
    /// Path to the input SD file holding the target and all candidates.
    #[arg(short, long, required = true, value_name = "PATH")]
    pub input: PathBuf,

    /// Name of the target structure (title line of its SDF record).
    #[arg(short, long, required = true, value_name = "NAME")]
    pub target: String,

    /// Distance threshold in the unit of the input coordinates (Angstroms).
    #[arg(short = 'd', long, value_name = "FLOAT", default_value_t = DEFAULT_THRESHOLD_ANGSTROM)]
    pub threshold: f64,

    /// Drop the target itself from the reported neighbors. By default the
    /// target matches itself at distance zero and is listed.
    #[arg(long)]
    pub exclude_target: bool,

    /// Emit the structured JSON response envelope instead of plain text.
    #[arg(long)]
    pub json: bool,
}
