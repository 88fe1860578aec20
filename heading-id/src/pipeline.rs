//! File processing pipeline
//!
//! This module drives heading id assignment over markdown files:
//! 1. **Discovery**: Expand the given paths into markdown files
//! 2. **Parsing**: Read each file and collect its headings
//! 3. **Assignment**: Run one isolated id pass per file
//!
//! Every file gets its own pass and registry, so files can be processed in
//! parallel (behind the `parallel` feature) without affecting the ids.

use crate::document::{AssignmentSummary, Document};
use crate::options::{Options, OptionsError, OPTIONS_FILE_NAME};
use std::path::{Path, PathBuf};
use thiserror::Error;
use walkdir::WalkDir;

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Result of processing one markdown file
#[derive(Debug)]
pub struct FileReport {
    /// Path of the processed file
    pub path: PathBuf,

    /// Headings with their assigned ids
    pub document: Document,

    /// Counts of assigned ids
    pub summary: AssignmentSummary,
}

impl FileReport {
    /// One line per heading: `<file>:<line>\th<level>\t<id or ->\t<text>`
    pub fn lines(&self) -> Vec<String> {
        self.document
            .headings
            .iter()
            .map(|heading| {
                format!(
                    "{}:{}\th{}\t{}\t{}",
                    self.path.display(),
                    heading.line_number,
                    heading.level,
                    heading.id.as_deref().unwrap_or("-"),
                    heading.text()
                )
            })
            .collect()
    }
}

/// Resolve the options for a run
///
/// # Parameters
/// * `config` - Explicit options file; when `None`, `heading-id.toml` in `dir` is used if present
/// * `dir` - Directory searched for the default options file
///
/// # Returns
/// * `Ok(Options)` - Loaded options, or defaults when no file applies
/// * `Err(PipelineError)` - The options file could not be read or parsed
pub fn load_options(config: Option<&Path>, dir: &Path) -> Result<Options, PipelineError> {
    if let Some(path) = config {
        log::info!("Loading options from {}", path.display());
        return Ok(Options::load(path)?);
    }

    let default_path = dir.join(OPTIONS_FILE_NAME);
    if default_path.is_file() {
        log::info!("Loading options from {}", default_path.display());
        return Ok(Options::load(&default_path)?);
    }

    log::debug!("No {} found, using default options", OPTIONS_FILE_NAME);
    Ok(Options::default())
}

/// Expand files and directories into the markdown files they contain
///
/// Files are kept as given. Directories are walked recursively for `.md`
/// files, sorted by file name.
///
/// # Returns
/// * `Ok(Vec<PathBuf>)` - Markdown files in processing order
/// * `Err(PipelineError)` - A path does not exist or a directory could not be walked
pub fn discover_markdown_files(paths: &[PathBuf]) -> Result<Vec<PathBuf>, PipelineError> {
    let mut files = Vec::new();

    for path in paths {
        if path.is_file() {
            files.push(path.clone());
            continue;
        }

        if !path.is_dir() {
            return Err(PipelineError::MissingPath(path.clone()));
        }

        for entry in WalkDir::new(path).follow_links(false).sort_by_file_name() {
            let entry = entry.map_err(|e| PipelineError::WalkError(path.clone(), e))?;
            let entry_path = entry.path();

            if !entry_path.is_file() {
                continue;
            }
            if entry_path.extension().and_then(|s| s.to_str()) != Some("md") {
                log::debug!("Skipping non-markdown file {}", entry_path.display());
                continue;
            }

            files.push(entry_path.to_path_buf());
        }
    }

    Ok(files)
}

/// Read a markdown file and assign ids to its headings
///
/// # Parameters
/// * `path` - Path to the markdown file
/// * `options` - Options for this file's run
///
/// # Returns
/// * `Ok(FileReport)` - Headings with their ids
/// * `Err(PipelineError)` - The file could not be read
pub fn process_file(path: &Path, options: &Options) -> Result<FileReport, PipelineError> {
    let content =
        std::fs::read_to_string(path).map_err(|e| PipelineError::IoError(path.to_path_buf(), e))?;

    let mut document = Document::parse(&content);
    let summary = document.assign_ids(options);

    log::info!(
        "{}: {} headings ({} explicit, {} generated, {} without id)",
        path.display(),
        document.headings.len(),
        summary.explicit,
        summary.generated,
        summary.without_id
    );

    Ok(FileReport {
        path: path.to_path_buf(),
        document,
        summary,
    })
}

/// Discover and process all markdown files under `paths`
///
/// Reports are returned in discovery order regardless of whether files were
/// processed in parallel.
pub fn process_paths(
    paths: &[PathBuf],
    options: &Options,
) -> Result<Vec<FileReport>, PipelineError> {
    let files = discover_markdown_files(paths)?;

    #[cfg(feature = "parallel")]
    let reports: Result<Vec<_>, _> = files
        .par_iter()
        .map(|path| process_file(path, options))
        .collect();

    #[cfg(not(feature = "parallel"))]
    let reports: Result<Vec<_>, _> = files
        .iter()
        .map(|path| process_file(path, options))
        .collect();

    reports
}

/// Pipeline errors
#[derive(Error, Debug)]
pub enum PipelineError {
    #[error("IO error reading {path}: {source}", path = .0.display(), source = .1)]
    IoError(PathBuf, #[source] std::io::Error),

    #[error("Path does not exist: {path}", path = .0.display())]
    MissingPath(PathBuf),

    #[error("Failed to walk directory {path}: {source}", path = .0.display(), source = .1)]
    WalkError(PathBuf, #[source] walkdir::Error),

    #[error(transparent)]
    OptionsError(#[from] OptionsError),
}
