//! CLI command definitions and argument parsing.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Linkage - Build a relationship graph from biographical records.
#[derive(Debug, Parser)]
#[command(name = "linkage")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Output format
    #[arg(short, long, value_enum, global = true)]
    pub format: Option<CliFormat>,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Configuration file path
    #[arg(short, long, global = true, env = "LINKAGE_CONFIG")]
    pub config: Option<PathBuf>,

    /// Enable debug logging (RUST_LOG takes precedence)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

/// Output format options.
#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum CliFormat {
    /// Table format (default)
    Table,
    /// JSON format
    Json,
    /// Quiet format (paths and names only)
    Quiet,
}

/// CLI commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Build the graph document and connection report
    Build(BuildArgs),

    /// Score records for the affiliation without writing anything
    Analyze(AnalyzeArgs),

    /// Print a lexicon preset as TOML
    Lexicon(LexiconArgs),
}

/// Arguments for the build command.
#[derive(Debug, Parser)]
pub struct BuildArgs {
    /// JSON file holding an array of records
    pub input: PathBuf,

    /// Graph document path (default: public/data/network.json)
    pub output: Option<PathBuf>,

    /// Lexicon file (.toml or .json)
    #[arg(short, long)]
    pub lexicon: Option<PathBuf>,

    /// Run the pairwise pass on a single thread
    #[arg(long)]
    pub sequential: bool,
}

/// Arguments for the analyze command.
#[derive(Debug, Parser)]
pub struct AnalyzeArgs {
    /// JSON file holding an array of records
    pub input: PathBuf,

    /// Show the evidence of a single record
    #[arg(short, long)]
    pub name: Option<String>,

    /// Lexicon file (.toml or .json)
    #[arg(short, long)]
    pub lexicon: Option<PathBuf>,
}

/// Arguments for the lexicon command.
#[derive(Debug, Parser)]
pub struct LexiconArgs {
    /// Preset to print
    #[arg(short, long, value_enum, default_value = "reference")]
    pub preset: PresetArg,
}

/// Lexicon preset argument.
#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum PresetArg {
    /// Reference terms and thresholds
    Reference,
    /// Higher threshold, weaker positive context
    Strict,
    /// Lower threshold, full-weight links
    Lenient,
}

impl From<CliFormat> for crate::config::OutputFormat {
    fn from(format: CliFormat) -> Self {
        match format {
            CliFormat::Table => crate::config::OutputFormat::Table,
            CliFormat::Json => crate::config::OutputFormat::Json,
            CliFormat::Quiet => crate::config::OutputFormat::Quiet,
        }
    }
}

impl From<PresetArg> for linkage_analyzer::Lexicon {
    fn from(preset: PresetArg) -> Self {
        match preset {
            PresetArg::Reference => linkage_analyzer::Lexicon::reference(),
            PresetArg::Strict => linkage_analyzer::Lexicon::strict(),
            PresetArg::Lenient => linkage_analyzer::Lexicon::lenient(),
        }
    }
}
