use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

const HELP_TEMPLATE: &str = "\
{before-help}{name} {version}
{author-with-newline}{about-with-newline}
{usage-heading} {usage}

{all-args}{after-help}
";

#[derive(Parser, Debug)]
#[command(
    author = "afprep developers",
    version,
    about = "afprep - Batch preprocessing for AlphaFold3 inputs: extract per-chain sequences from PDB files and enrich job descriptors with precomputed MSA/template data.",
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
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Extract per-chain amino-acid sequences from a directory of PDB files
    /// into a plain-text report.
    Extract(ExtractArgs),
    /// Merge the reference job's MSA/template data into a batch of
    /// AlphaFold3 job JSON files, in place.
    Enrich(EnrichArgs),
}

/// Arguments for the `extract` subcommand.
#[derive(Args, Debug)]
pub struct ExtractArgs {
    /// Directory containing the input .pdb files.
    #[arg(value_name = "INPUT_DIRECTORY")]
    pub input_dir: PathBuf,

    /// Directory where sequences.txt is written (created if absent).
    #[arg(value_name = "OUTPUT_DIRECTORY")]
    pub output_dir: PathBuf,
}

/// Arguments for the `enrich` subcommand.
///
/// Runs with no arguments using the compiled-in defaults; a TOML config file
/// and individual flags can override them (flags win over the file).
#[derive(Args, Debug, Default)]
pub struct EnrichArgs {
    /// Path to a TOML configuration file.
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Override the reference job file holding the template data.
    #[arg(short, long, value_name = "PATH")]
    pub reference: Option<PathBuf>,

    /// Override the folder containing the target job files.
    #[arg(short, long, value_name = "PATH")]
    pub input_dir: Option<PathBuf>,

    /// Override the glob pattern matched inside the input folder.
    #[arg(short, long, value_name = "GLOB")]
    pub pattern: Option<String>,
}
