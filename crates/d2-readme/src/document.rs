//! Markdown document model and rendering.
//!
//! Documents are gathered from the filesystem into plain values and then
//! rendered to strings, so the layout can be tested without touching disk.
//!
//! # Layout
//!
//! A directory document is, in order: a heading, an optional `## Sections`
//! navigation block, an optional description, and the diagram sections
//! separated by horizontal rules. The top-level document has a fixed
//! heading, the navigation block, and an optional description, but never
//! diagram sections.

use std::{ffi::OsStr, path::Path};

use crate::{
    config::{AppConfig, FilesConfig},
    discovery,
    error::Result,
    title::{format_title, split_numeric_prefix},
};

const DIAGRAM_SEPARATOR: &str = "\n\n---\n\n";

/// A single diagram section.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiagramEntry {
    stem: String,
    companion: Option<String>,
}

impl DiagramEntry {
    /// Creates an entry for the diagram with file stem `stem`.
    pub fn new(stem: impl Into<String>, companion: Option<String>) -> Self {
        Self {
            stem: stem.into(),
            companion,
        }
    }

    /// Gathers the entry for a diagram file, reading its companion text.
    ///
    /// # Errors
    ///
    /// Returns an I/O error if the companion exists but cannot be read.
    pub fn gather(diagram: &Path, files: &FilesConfig) -> Result<Self> {
        let stem = diagram
            .file_stem()
            .map(|stem| stem.to_string_lossy().into_owned())
            .unwrap_or_default();
        let companion = discovery::companion_content(diagram, files)?;
        Ok(Self::new(stem, companion))
    }

    /// The diagram's file stem.
    pub fn stem(&self) -> &str {
        &self.stem
    }

    /// Renders the section: heading, optional companion text, image link.
    pub fn render(&self, files: &FilesConfig) -> String {
        let title = format_title(&self.stem);
        let heading = match split_numeric_prefix(&self.stem) {
            Some((prefix, _)) => format!("## {prefix} - {title}"),
            None => format!("## {title}"),
        };

        let mut lines = vec![heading];
        if let Some(companion) = &self.companion {
            lines.push(String::new());
            lines.push(companion.clone());
        }
        lines.push(String::new());
        lines.push(format!(
            "![{title}](./{}/{}.{})",
            files.image_dir(),
            self.stem,
            files.image_extension()
        ));

        lines.join("\n")
    }
}

/// The generated document for one directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirectoryDocument {
    title: String,
    sections: Vec<String>,
    description: Option<String>,
    diagrams: Vec<DiagramEntry>,
}

impl DirectoryDocument {
    /// Creates a document from already gathered parts.
    pub fn new(
        title: impl Into<String>,
        sections: Vec<String>,
        description: Option<String>,
        diagrams: Vec<DiagramEntry>,
    ) -> Self {
        Self {
            title: title.into(),
            sections,
            description,
            diagrams,
        }
    }

    /// Gathers the document for `dir` from the filesystem.
    ///
    /// The heading is the configured root title when `dir` is `root`, and
    /// the formatted directory name otherwise.
    ///
    /// # Errors
    ///
    /// Returns an I/O error if `dir` cannot be listed or an existing text
    /// file cannot be read.
    pub fn gather(dir: &Path, root: &Path, config: &AppConfig) -> Result<Self> {
        let files = config.files();

        let title = if dir == root {
            config.titles().root().to_string()
        } else {
            format_title(&dir.file_name().map(OsStr::to_string_lossy).unwrap_or_default())
        };

        let sections = discovery::subdirectories(dir, files)?;
        let description = discovery::directory_description(dir, files)?;
        let diagrams = discovery::find_diagrams(dir, files)?
            .iter()
            .map(|diagram| DiagramEntry::gather(diagram, files))
            .collect::<Result<Vec<_>>>()?;

        Ok(Self::new(title, sections, description, diagrams))
    }

    /// The document heading text.
    pub fn title(&self) -> &str {
        &self.title
    }

    /// The diagram sections in document order.
    pub fn diagrams(&self) -> &[DiagramEntry] {
        &self.diagrams
    }

    /// Renders the document as markdown.
    pub fn render(&self, files: &FilesConfig) -> String {
        let mut lines = vec![format!("# {}", self.title), String::new()];

        push_navigation(&mut lines, &self.sections);

        if let Some(description) = &self.description {
            lines.push(description.clone());
            lines.push(String::new());
        }

        if !self.diagrams.is_empty() {
            if !self.sections.is_empty() || self.description.is_some() {
                lines.push("## Diagrams".to_string());
                lines.push(String::new());
            }

            let sections: Vec<String> =
                self.diagrams.iter().map(|diagram| diagram.render(files)).collect();
            lines.push(sections.join(DIAGRAM_SEPARATOR));
        }

        lines.join("\n")
    }
}

/// The generated document at the project root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TopLevelDocument {
    title: String,
    sections: Vec<String>,
    description: Option<String>,
}

impl TopLevelDocument {
    /// Creates a document from already gathered parts.
    pub fn new(title: impl Into<String>, sections: Vec<String>, description: Option<String>) -> Self {
        Self {
            title: title.into(),
            sections,
            description,
        }
    }

    /// Gathers the top-level document for `root`.
    ///
    /// # Errors
    ///
    /// Returns an I/O error if `root` cannot be listed or the top-level
    /// description exists but cannot be read.
    pub fn gather(root: &Path, config: &AppConfig) -> Result<Self> {
        let files = config.files();
        let sections = discovery::subdirectories(root, files)?;
        let description = discovery::read_trimmed(&root.join(files.top_level_description()))?;
        Ok(Self::new(config.titles().repository(), sections, description))
    }

    /// Renders the document as markdown.
    pub fn render(&self) -> String {
        let mut lines = vec![format!("# {}", self.title), String::new()];

        push_navigation(&mut lines, &self.sections);

        if let Some(description) = &self.description {
            lines.push(description.clone());
            lines.push(String::new());
        }

        lines.join("\n")
    }
}

fn push_navigation(lines: &mut Vec<String>, sections: &[String]) {
    if sections.is_empty() {
        return;
    }

    lines.push("## Sections".to_string());
    lines.push(String::new());
    for name in sections {
        lines.push(format!("- [{}](./{name}/)", format_title(name)));
    }
    lines.push(String::new());
}
