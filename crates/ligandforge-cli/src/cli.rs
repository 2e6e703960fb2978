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
    version,
    about = "ligandforge - A command-line decision engine for organometallic catalyst recommendation and ligand variant design.",
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

    /// Load the catalyst database from a TOML file instead of the bundled one.
    #[arg(short = 'd', long, global = true, value_name = "PATH")]
    pub database: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Rank the catalyst database against a reaction descriptor.
    Recommend(RecommendArgs),
    /// Generate structural variants of a ligand scaffold.
    Design(DesignArgs),
    /// Run the combined recommend/design chain from a JSON request.
    Chain(ChainArgs),
}

/// Arguments for the `recommend` subcommand.
#[derive(Args, Debug)]
pub struct RecommendArgs {
    /// Reaction descriptor (e.g. 'suzuki', 'ring closing metathesis', 'C-N coupling').
    #[arg(required = true, value_name = "REACTION")]
    pub reaction: String,

    /// Substrate structure descriptor, echoed into the report.
    #[arg(long, value_name = "SMILES")]
    pub substrate: Option<String>,

    /// Prefer catalysts built on this metal (e.g. 'Pd', 'Ni').
    #[arg(long, value_name = "SYMBOL")]
    pub prefer_metal: Option<String>,

    /// Exclude catalysts costlier than this tier
    /// (very_low, low, medium, high, very_high).
    #[arg(long, value_name = "TIER")]
    pub max_cost: Option<String>,

    /// Favor earth-abundant metals (Ni, Cu, Fe, Zr).
    #[arg(long)]
    pub earth_abundant: bool,

    /// Favor chiral catalyst systems for enantioselective reactions.
    #[arg(long)]
    pub enantioselective: bool,

    /// Write the JSON report to a file instead of stdout.
    #[arg(short, long, value_name = "PATH")]
    pub output: Option<PathBuf>,
}

/// Arguments for the `design` subcommand.
#[derive(Args, Debug)]
pub struct DesignArgs {
    /// Ligand scaffold: a known alias (e.g. 'PPh3', 'dppe') or a raw SMILES string.
    #[arg(required = true, value_name = "SCAFFOLD")]
    pub scaffold: String,

    /// Variant generation strategy (steric, electronic, bioisosteric, all).
    #[arg(short, long, value_name = "STRATEGY", default_value = "all")]
    pub strategy: String,

    /// Write the JSON report to a file instead of stdout.
    #[arg(short, long, value_name = "PATH")]
    pub output: Option<PathBuf>,
}

/// Arguments for the `chain` subcommand.
#[derive(Args, Debug)]
pub struct ChainArgs {
    /// Path to a JSON request file, or '-' to read the request from stdin.
    #[arg(required = true, value_name = "REQUEST")]
    pub request: PathBuf,

    /// Write the JSON report to a file instead of stdout.
    #[arg(short, long, value_name = "PATH")]
    pub output: Option<PathBuf>,
}
