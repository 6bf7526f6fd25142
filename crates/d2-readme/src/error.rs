//! Error types for README generation.
//!
//! This module provides the main error type [`Error`] which wraps the
//! conditions that abort a generation run.

use std::{io, path::PathBuf};

use thiserror::Error;

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;

/// The main error type for README generation.
///
/// Missing optional inputs (companion files, description files) are never
/// reported here; they are treated as absent content.
#[derive(Debug, Error)]
pub enum Error {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("Directory {} is outside the project root {}", dir.display(), root.display())]
    OutsideRoot { dir: PathBuf, root: PathBuf },

    #[error("Configuration error: {0}")]
    Config(String),
}
