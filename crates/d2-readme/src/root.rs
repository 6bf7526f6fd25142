//! Project root resolution.

use std::path::{Path, PathBuf};

use log::debug;

use crate::error::Result;

/// Version-control marker identifying the project root.
pub const VCS_MARKER: &str = ".git";

/// Finds the project root for `start`.
///
/// Walks `start` and its ancestors upward and returns the first directory
/// containing [`VCS_MARKER`]. When no ancestor has one, `start` itself is
/// the root. The result is canonicalized so it can be compared against
/// canonicalized target directories.
///
/// # Errors
///
/// Returns an I/O error if `start` cannot be canonicalized.
pub fn find_project_root(start: impl AsRef<Path>) -> Result<PathBuf> {
    let start = start.as_ref().canonicalize()?;

    let root = start
        .ancestors()
        .find(|dir| dir.join(VCS_MARKER).exists())
        .map(Path::to_path_buf);

    match root {
        Some(root) => {
            debug!(root = root.display().to_string(); "Found project root");
            Ok(root)
        }
        None => {
            debug!(
                start = start.display().to_string();
                "No version-control marker found, using start directory"
            );
            Ok(start)
        }
    }
}

#[cfg(test)]
mod tests {
    use std::fs;

    use tempfile::tempdir;

    use super::*;

    #[test]
    fn test_finds_marker_in_ancestor() {
        let tmp = tempdir().unwrap();
        let root = tmp.path().canonicalize().unwrap();
        fs::create_dir(root.join(VCS_MARKER)).unwrap();
        let nested = root.join("a/b");
        fs::create_dir_all(&nested).unwrap();

        assert_eq!(find_project_root(&nested).unwrap(), root);
    }

    #[test]
    fn test_marker_may_be_a_file() {
        // Worktrees and submodules use a `.git` file.
        let tmp = tempdir().unwrap();
        let root = tmp.path().canonicalize().unwrap();
        fs::write(root.join(VCS_MARKER), "gitdir: elsewhere").unwrap();

        assert_eq!(find_project_root(&root).unwrap(), root);
    }

    #[test]
    fn test_nearest_marker_wins() {
        let tmp = tempdir().unwrap();
        let outer = tmp.path().canonicalize().unwrap();
        let inner = outer.join("inner");
        fs::create_dir_all(inner.join(VCS_MARKER)).unwrap();
        fs::create_dir(outer.join(VCS_MARKER)).unwrap();

        assert_eq!(find_project_root(inner.join(".")).unwrap(), inner);
    }

    #[test]
    fn test_missing_start_is_error() {
        let tmp = tempdir().unwrap();
        assert!(find_project_root(tmp.path().join("missing")).is_err());
    }
}
