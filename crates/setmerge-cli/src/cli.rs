use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "setmerge",
    about = "Merge sets of unique elements read from JSON or TOML files",
    version,
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Output format; overrides the config file
    #[arg(long, global = true)]
    pub format: Option<OutputFormat>,
}

#[derive(Clone, Copy, Debug, clap::ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

impl From<OutputFormat> for setmerge_input::OutputFormat {
    fn from(value: OutputFormat) -> Self {
        match value {
            OutputFormat::Text => setmerge_input::OutputFormat::Text,
            OutputFormat::Json => setmerge_input::OutputFormat::Json,
        }
    }
}

#[derive(Clone, Copy, Debug, clap::ValueEnum)]
pub enum InputFormat {
    Json,
    Toml,
}

impl From<InputFormat> for setmerge_input::SetFormat {
    fn from(value: InputFormat) -> Self {
        match value {
            InputFormat::Json => setmerge_input::SetFormat::Json,
            InputFormat::Toml => setmerge_input::SetFormat::Toml,
        }
    }
}

#[derive(Subcommand)]
pub enum Command {
    /// Merge two set files into their union
    Merge(MergeArgs),
    /// Merge any number of set files
    Union(UnionArgs),
    /// Parse a set file and report its size
    Check(CheckArgs),
}

#[derive(Args)]
pub struct MergeArgs {
    pub left: PathBuf,
    pub right: PathBuf,
    /// Merge into an ordered set
    #[arg(long)]
    pub ordered: bool,
    /// Print overlap statistics
    #[arg(long)]
    pub report: bool,
    #[arg(long)]
    pub config: Option<PathBuf>,
    /// Force the input format instead of inferring it from the extension
    #[arg(long, value_enum)]
    pub input_format: Option<InputFormat>,
}

#[derive(Args)]
pub struct UnionArgs {
    #[arg(required = true)]
    pub files: Vec<PathBuf>,
    #[arg(long)]
    pub ordered: bool,
    #[arg(long)]
    pub config: Option<PathBuf>,
    #[arg(long, value_enum)]
    pub input_format: Option<InputFormat>,
}

#[derive(Args)]
pub struct CheckArgs {
    pub file: PathBuf,
    #[arg(long, value_enum)]
    pub input_format: Option<InputFormat>,
}
