//! Configuration types for README generation.
//!
//! This module provides the naming conventions the generator relies on.
//! All types implement [`serde::Deserialize`] so they can be loaded from
//! external sources, and every field falls back to its default when omitted.
//!
//! # Overview
//!
//! - [`AppConfig`] - Top-level configuration combining file and title settings.
//! - [`FilesConfig`] - File extensions and reserved file and directory names.
//! - [`TitlesConfig`] - Fixed headings for the project root documents.
//!
//! # Example
//!
//! ```
//! # use d2_readme::config::AppConfig;
//! let config = AppConfig::default();
//! assert_eq!(config.files().diagram_extension(), "d2");
//! assert_eq!(config.titles().repository(), "D2 Diagrams Repository");
//! ```

use serde::Deserialize;

/// Top-level configuration combining file and title settings.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AppConfig {
    /// File naming section.
    #[serde(default)]
    files: FilesConfig,

    /// Heading section.
    #[serde(default)]
    titles: TitlesConfig,
}

impl AppConfig {
    /// Creates a new [`AppConfig`] from its sections.
    pub fn new(files: FilesConfig, titles: TitlesConfig) -> Self {
        Self { files, titles }
    }

    /// Returns the file naming configuration.
    pub fn files(&self) -> &FilesConfig {
        &self.files
    }

    /// Returns the heading configuration.
    pub fn titles(&self) -> &TitlesConfig {
        &self.titles
    }
}

/// File extensions and reserved names.
///
/// Extensions are given without the leading dot.
#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FilesConfig {
    diagram_extension: String,
    text_extension: String,
    image_dir: String,
    image_extension: String,
    output: String,
    directory_description: String,
    top_level_description: String,
}

impl Default for FilesConfig {
    fn default() -> Self {
        Self {
            diagram_extension: "d2".to_string(),
            text_extension: "md".to_string(),
            image_dir: "diagrams".to_string(),
            image_extension: "png".to_string(),
            output: "README.md".to_string(),
            directory_description: "directory.md".to_string(),
            top_level_description: "top-level.md".to_string(),
        }
    }
}

impl FilesConfig {
    /// Extension identifying diagram source files.
    pub fn diagram_extension(&self) -> &str {
        &self.diagram_extension
    }

    /// Extension of companion and description text files.
    pub fn text_extension(&self) -> &str {
        &self.text_extension
    }

    /// Name of the subdirectory holding rendered images.
    ///
    /// This directory is also excluded from every traversal.
    pub fn image_dir(&self) -> &str {
        &self.image_dir
    }

    /// Extension of rendered images.
    pub fn image_extension(&self) -> &str {
        &self.image_extension
    }

    /// File name of the generated document.
    pub fn output(&self) -> &str {
        &self.output
    }

    /// Generic directory description file name.
    pub fn directory_description(&self) -> &str {
        &self.directory_description
    }

    /// Description file read for the top-level document.
    pub fn top_level_description(&self) -> &str {
        &self.top_level_description
    }

    /// Overrides the rendered image directory name.
    pub fn with_image_dir(mut self, image_dir: impl Into<String>) -> Self {
        self.image_dir = image_dir.into();
        self
    }

    /// Overrides the generated document file name.
    pub fn with_output(mut self, output: impl Into<String>) -> Self {
        self.output = output.into();
        self
    }

    /// Checks that every configured name is usable as a single path component.
    ///
    /// # Errors
    ///
    /// Returns a message naming the first empty or multi-component value.
    pub fn validate(&self) -> Result<(), String> {
        let names = [
            ("diagram_extension", &self.diagram_extension),
            ("text_extension", &self.text_extension),
            ("image_dir", &self.image_dir),
            ("image_extension", &self.image_extension),
            ("output", &self.output),
            ("directory_description", &self.directory_description),
            ("top_level_description", &self.top_level_description),
        ];

        for (key, value) in names {
            if value.is_empty() {
                return Err(format!("files.{key} must not be empty"));
            }
            if value.contains(['/', '\\']) {
                return Err(format!("files.{key} must be a plain name, got `{value}`"));
            }
        }

        Ok(())
    }
}

/// Fixed headings used at the project root.
#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct TitlesConfig {
    root: String,
    repository: String,
}

impl Default for TitlesConfig {
    fn default() -> Self {
        Self {
            root: "D2 Diagrams".to_string(),
            repository: "D2 Diagrams Repository".to_string(),
        }
    }
}

impl TitlesConfig {
    /// Heading of the project root's per-directory document.
    pub fn root(&self) -> &str {
        &self.root
    }

    /// Heading of the top-level document.
    pub fn repository(&self) -> &str {
        &self.repository
    }
}
