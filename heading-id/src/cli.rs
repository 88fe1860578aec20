//! Command-line interface definitions for heading-id

use clap::Parser;
use std::path::PathBuf;

/// CLI structure for the heading-id application
#[derive(Parser)]
#[command(name = "heading-id")]
#[command(version)]
#[command(about = "Assign ids to markdown headings", long_about = None)]
pub struct Cli {
    /// Markdown files or directories to process
    #[arg(value_name = "PATH", default_value = ".")]
    pub paths: Vec<PathBuf>,

    /// Options file (defaults to ./heading-id.toml when present)
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Generate ids for headings without a {#id} marker
    #[arg(short, long)]
    pub defaults: bool,

    /// Suffix repeated generated ids with -1, -2, ...
    #[arg(short, long)]
    pub unique_defaults: bool,

    /// Prefix for generated ids
    #[arg(short, long, value_name = "PREFIX")]
    pub prefix: Option<String>,

    /// Print the effective options as TOML and exit
    #[arg(long)]
    pub show_options: bool,

    /// Verbose output
    #[arg(short, long)]
    pub verbose: bool,
}
