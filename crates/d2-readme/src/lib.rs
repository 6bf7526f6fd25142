//! d2-readme - README generation for directories of D2 diagrams.
//!
//! Scans a project tree for D2 diagram sources (`*.d2`) and writes a
//! `README.md` into each relevant directory. Each document links to the
//! subdirectories that lead to more diagrams, includes an optional
//! directory description, and lists one section per diagram with its
//! companion text and a link to the pre-rendered image. A separate
//! top-level document is written at the project root.
//!
//! # Example
//!
//! ```rust,no_run
//! use d2_readme::{Selection, Synthesizer, config::AppConfig, find_project_root};
//!
//! let root = find_project_root(".").expect("Failed to resolve project root");
//! let mut synthesizer = Synthesizer::new(AppConfig::default(), &root, std::io::stdout())
//!     .expect("Failed to create synthesizer");
//! synthesizer
//!     .run(&Selection::Explicit(vec!["docs/architecture".into()]))
//!     .expect("Failed to generate documents");
//! ```

pub mod config;
pub mod discovery;
pub mod document;
pub mod title;

mod error;
mod root;
mod selection;
mod synthesizer;

pub use error::{Error, Result};
pub use root::{VCS_MARKER, find_project_root};
pub use selection::Selection;
pub use synthesizer::{ProcessedSet, Synthesizer};
