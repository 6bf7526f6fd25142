//! Document generation for a project tree.

use std::{
    collections::BTreeSet,
    fs,
    io::Write,
    path::{Path, PathBuf},
};

use log::{debug, info};

use crate::{
    config::AppConfig,
    discovery,
    document::{DirectoryDocument, TopLevelDocument},
    error::{Error, Result},
    selection::Selection,
};

/// Canonical directories already regenerated during one run.
pub type ProcessedSet = BTreeSet<PathBuf>;

/// Generates and writes documents under a project root.
///
/// Every written document is confirmed with an `Updated: <path>` line on
/// `out`.
///
/// # Examples
///
/// ```rust,no_run
/// use d2_readme::{Selection, Synthesizer, config::AppConfig};
///
/// let mut synthesizer = Synthesizer::new(AppConfig::default(), "/repo", std::io::stdout())
///     .expect("Invalid project root");
/// synthesizer.run(&Selection::FullScan).expect("Generation failed");
/// ```
pub struct Synthesizer<W: Write> {
    config: AppConfig,
    root: PathBuf,
    out: W,
}

impl<W: Write> Synthesizer<W> {
    /// Creates a synthesizer for the project rooted at `root`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Config`] if the configuration is invalid, or an I/O
    /// error if `root` cannot be canonicalized.
    pub fn new(config: AppConfig, root: impl AsRef<Path>, out: W) -> Result<Self> {
        config.files().validate().map_err(Error::Config)?;
        let root = root.as_ref().canonicalize()?;
        Ok(Self { config, root, out })
    }

    /// The canonical project root.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Consumes the synthesizer and returns the confirmation sink.
    pub fn into_inner(self) -> W {
        self.out
    }

    /// Regenerates the documents named by `selection`.
    ///
    /// # Errors
    ///
    /// Returns the first I/O error encountered, or [`Error::OutsideRoot`]
    /// for an explicit target outside the project root. Documents written
    /// before the error are left in place.
    pub fn run(&mut self, selection: &Selection) -> Result<()> {
        let mut processed = ProcessedSet::new();

        match selection {
            Selection::Explicit(dirs) => self.process_directories(dirs, &mut processed)?,
            Selection::TopLevel => {
                self.update_top_level()?;
            }
            Selection::FullScan => self.full_scan(&mut processed)?,
        }

        debug!(directories = processed.len(); "Run finished");
        Ok(())
    }

    /// Regenerates each directory in `dirs` and all of its ancestors up to
    /// and including the project root.
    ///
    /// Relative paths are resolved against the project root. Directories
    /// already in `processed` are skipped.
    ///
    /// # Errors
    ///
    /// Returns [`Error::OutsideRoot`] if a target does not lie under the
    /// project root, or an I/O error if a target cannot be resolved or a
    /// document cannot be written.
    pub fn process_directories(
        &mut self,
        dirs: &[PathBuf],
        processed: &mut ProcessedSet,
    ) -> Result<()> {
        for dir in dirs {
            let dir = self.resolve(dir)?;
            self.update_with_ancestors(&dir, processed)?;
        }

        Ok(())
    }

    /// Regenerates every relevant directory under the root and its
    /// ancestors, then the top-level document.
    ///
    /// Ancestors are included so every `## Sections` link points at a
    /// generated document.
    ///
    /// # Errors
    ///
    /// Returns an I/O error if a document cannot be gathered or written.
    pub fn full_scan(&mut self, processed: &mut ProcessedSet) -> Result<()> {
        let files = self.config.files();
        let selected = discovery::scan_tree(&self.root, files);
        info!(count = selected.len(); "Selected directories");

        for dir in selected {
            self.update_with_ancestors(&dir, processed)?;
        }

        self.update_top_level()?;
        Ok(())
    }

    /// Regenerates `dir` and each ancestor up to and including the root,
    /// skipping directories already in `processed`.
    ///
    /// `dir` must be a canonical path under the root.
    fn update_with_ancestors(&mut self, dir: &Path, processed: &mut ProcessedSet) -> Result<()> {
        for ancestor in dir.ancestors() {
            if processed.insert(ancestor.to_path_buf()) {
                self.update_directory(ancestor)?;
            }
            if ancestor == self.root {
                break;
            }
        }

        Ok(())
    }

    /// Regenerates the per-directory document of `dir`.
    ///
    /// Returns the path of the written document.
    ///
    /// # Errors
    ///
    /// Returns an I/O error if the directory cannot be read or the document
    /// cannot be written.
    pub fn update_directory(&mut self, dir: &Path) -> Result<PathBuf> {
        let document = DirectoryDocument::gather(dir, &self.root, &self.config)?;
        debug!(
            dir = dir.display().to_string(),
            diagrams = document.diagrams().len();
            "Gathered directory document"
        );

        let content = document.render(self.config.files());
        let path = dir.join(self.config.files().output());
        self.write(path, &content)
    }

    /// Regenerates the top-level document at the project root.
    ///
    /// Returns the path of the written document.
    ///
    /// # Errors
    ///
    /// Returns an I/O error if the root cannot be read or the document
    /// cannot be written.
    pub fn update_top_level(&mut self) -> Result<PathBuf> {
        let document = TopLevelDocument::gather(&self.root, &self.config)?;
        let content = document.render();
        let path = self.root.join(self.config.files().output());
        self.write(path, &content)
    }

    fn resolve(&self, dir: &Path) -> Result<PathBuf> {
        let joined = if dir.is_absolute() {
            dir.to_path_buf()
        } else {
            self.root.join(dir)
        };
        let dir = joined.canonicalize()?;

        if !dir.starts_with(&self.root) {
            return Err(Error::OutsideRoot {
                dir,
                root: self.root.clone(),
            });
        }

        Ok(dir)
    }

    fn write(&mut self, path: PathBuf, content: &str) -> Result<PathBuf> {
        fs::write(&path, content)?;
        info!(path = path.display().to_string(), bytes = content.len(); "Document written");
        writeln!(self.out, "Updated: {}", path.display())?;
        Ok(path)
    }
}
