//! heading-id - assign ids to markdown headings
//!
//! A CLI tool that reads markdown files, extracts explicit `{#id}` markers
//! from headings and optionally generates ids for the remaining ones.

#![deny(unsafe_code)]
#![cfg_attr(all(not(debug_assertions), not(test)), deny(clippy::all))]
#![cfg_attr(all(not(debug_assertions), not(test)), deny(clippy::pedantic))]
#![cfg_attr(all(not(debug_assertions), not(test)), deny(missing_docs))]
// Allow some pedantic lints that are too strict for this project
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]

mod cli;

use anyhow::{Context, Result};
use clap::Parser;
use cli::Cli;
use heading_id::pipeline;

/// Main entry point for the heading-id CLI application
fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {:?}", e);
        std::process::exit(1);
    }
}

/// Run the CLI application
fn run() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging; --verbose raises the level to info
    let mut logger = env_logger::Builder::from_default_env();
    if cli.verbose {
        logger.filter_level(log::LevelFilter::Info);
    }
    logger.init();

    let current_dir = std::env::current_dir().context("Failed to read current directory")?;
    let file_options = pipeline::load_options(cli.config.as_deref(), &current_dir)
        .context("Failed to load options")?;
    let options = file_options.with_overrides(cli.defaults, cli.unique_defaults, cli.prefix);
    log::info!("Using options: {:?}", options);

    if cli.show_options {
        print!(
            "{}",
            options.to_toml().context("Failed to serialize options")?
        );
        return Ok(());
    }

    let reports = pipeline::process_paths(&cli.paths, &options).with_context(|| {
        format!(
            "Failed to process {}",
            cli.paths
                .iter()
                .map(|p| p.display().to_string())
                .collect::<Vec<_>>()
                .join(", ")
        )
    })?;

    for report in &reports {
        for line in report.lines() {
            println!("{}", line);
        }
    }

    Ok(())
}
