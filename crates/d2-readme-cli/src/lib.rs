//! CLI logic for the D2 README generator.
//!
//! This module contains the core CLI logic: project root resolution,
//! configuration loading, target selection, and document generation.

pub mod error_adapter;

mod args;
mod config;

pub use args::Args;
pub use config::LOCAL_CONFIG_FILE;

use std::{
    env,
    io::{self, BufRead, Write},
    path::PathBuf,
};

use log::{info, warn};

use d2_readme::{Error, Selection, Synthesizer, find_project_root};

/// Run the d2-readme CLI application
///
/// Reads the target list from stdin when requested and confirms every
/// written document on stdout.
///
/// # Errors
///
/// Returns `Error` for:
/// - Project root resolution failures
/// - Configuration loading errors
/// - Targets outside the project root
/// - File I/O errors
pub fn run(args: &Args) -> Result<(), Error> {
    run_with_io(args, io::stdin().lock(), io::stdout().lock())
}

/// Run the CLI with explicit input and output streams.
///
/// `input` is only read when the targets argument is `-`.
///
/// # Errors
///
/// See [`run`].
pub fn run_with_io(args: &Args, input: impl BufRead, out: impl Write) -> Result<(), Error> {
    let start = match &args.root {
        Some(root) => PathBuf::from(root),
        None => env::current_dir()?,
    };
    let root = find_project_root(&start)?;
    info!(root = root.display().to_string(); "Resolved project root");

    let app_config = config::load_config(args.config.as_ref(), &root)?;

    let selection = if args.top_level {
        Selection::TopLevel
    } else if args.reads_stdin() {
        Selection::from_reader(input)?
    } else {
        match &args.targets {
            Some(targets) => Selection::from_lines(targets),
            None => Selection::FullScan,
        }
    };

    if selection == Selection::Explicit(Vec::new()) {
        warn!("No target directories given, nothing to do");
        return Ok(());
    }
    info!(selection:?; "Generating documents");

    let mut synthesizer = Synthesizer::new(app_config, &root, out)?;
    synthesizer.run(&selection)?;

    Ok(())
}
