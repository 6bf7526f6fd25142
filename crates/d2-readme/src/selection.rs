//! Selection of the directories a run regenerates.

use std::{io::BufRead, path::PathBuf};

use crate::error::Result;

/// Which documents a run regenerates.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Selection {
    /// The listed directories plus every ancestor up to the project root.
    Explicit(Vec<PathBuf>),
    /// Only the top-level document.
    TopLevel,
    /// Every relevant directory under the project root, then the top-level
    /// document.
    FullScan,
}

impl Selection {
    /// Builds an explicit selection from newline-delimited paths.
    ///
    /// Entries are trimmed and blank lines are dropped.
    ///
    /// # Examples
    ///
    /// ```
    /// # use std::path::PathBuf;
    /// # use d2_readme::Selection;
    /// let selection = Selection::from_lines("a/b\n\n  c \n");
    /// assert_eq!(
    ///     selection,
    ///     Selection::Explicit(vec![PathBuf::from("a/b"), PathBuf::from("c")])
    /// );
    /// ```
    pub fn from_lines(text: &str) -> Self {
        Self::Explicit(
            text.lines()
                .map(str::trim)
                .filter(|line| !line.is_empty())
                .map(PathBuf::from)
                .collect(),
        )
    }

    /// Builds an explicit selection from a line-oriented reader such as stdin.
    ///
    /// # Errors
    ///
    /// Returns an I/O error if the reader fails.
    pub fn from_reader(reader: impl BufRead) -> Result<Self> {
        let mut dirs = Vec::new();
        for line in reader.lines() {
            let line = line?;
            let line = line.trim();
            if !line.is_empty() {
                dirs.push(PathBuf::from(line));
            }
        }
        Ok(Self::Explicit(dirs))
    }
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use super::*;

    #[test]
    fn test_from_reader_matches_from_lines() {
        let text = "docs/a\n\r\n docs/b \r\n";
        let from_reader = Selection::from_reader(Cursor::new(text)).unwrap();
        assert_eq!(from_reader, Selection::from_lines(text));
        assert_eq!(
            from_reader,
            Selection::Explicit(vec![PathBuf::from("docs/a"), PathBuf::from("docs/b")])
        );
    }

    #[test]
    fn test_blank_input_is_empty_selection() {
        assert_eq!(Selection::from_lines(" \n\n"), Selection::Explicit(vec![]));
    }
}
