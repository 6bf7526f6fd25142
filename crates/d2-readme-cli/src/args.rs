//! Command-line argument definitions for the d2-readme CLI.
//!
//! This module defines the [`Args`] structure parsed from the command line
//! using [`clap`]. Arguments select which documents are regenerated and
//! control configuration file selection and logging verbosity.

use std::str::FromStr;

use clap::Parser;
use log::LevelFilter;

/// Command-line arguments for the D2 README generator
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Directories to regenerate, newline-delimited, or `-` to read them from stdin.
    /// Without this argument the whole project tree is scanned.
    #[arg(value_name = "TARGETS")]
    pub targets: Option<String>,

    /// Only regenerate the top-level README
    #[arg(long, conflicts_with = "targets")]
    pub top_level: bool,

    /// Directory to start the project root search from
    #[arg(short = 'C', long)]
    pub root: Option<String>,

    /// Path to configuration file (TOML)
    #[arg(short, long)]
    pub config: Option<String>,

    /// Log level (off, error, warn, info, debug, trace)
    #[arg(long, default_value = "info")]
    pub log_level: String,
}

impl Args {
    /// Returns `true` if the directory list should be read from stdin.
    pub fn reads_stdin(&self) -> bool {
        self.targets.as_deref() == Some("-")
    }

    /// Parses `--log-level`, or returns `None` if it names no known level.
    pub fn log_filter(&self) -> Option<LevelFilter> {
        LevelFilter::from_str(&self.log_level).ok()
    }
}
