//! Filesystem discovery of diagrams, subdirectories, and text content.
//!
//! Every function here is read-only. Missing optional files are reported as
//! `None` rather than errors; only failures to list or read an existing
//! entry are propagated.

use std::{
    collections::BTreeSet,
    ffi::OsStr,
    fs, io,
    path::{Path, PathBuf},
};

use log::{debug, trace};
use walkdir::{DirEntry, WalkDir};

use crate::{config::FilesConfig, error::Result, title::has_numeric_prefix};

/// Returns `true` for directory names excluded from every traversal.
///
/// Hidden directories and the rendered image directory never contribute
/// diagrams or navigation entries.
pub fn is_excluded_dir(name: &str, files: &FilesConfig) -> bool {
    name.starts_with('.') || name == files.image_dir()
}

/// Returns `true` if `name` is a diagram source file name.
pub fn is_diagram_name(name: &str, files: &FilesConfig) -> bool {
    !name.starts_with('.')
        && Path::new(name).extension().and_then(OsStr::to_str) == Some(files.diagram_extension())
}

fn entry_name(entry: &DirEntry) -> &str {
    entry.file_name().to_str().unwrap_or_default()
}

/// Lists the diagram files directly inside `dir`, in document order.
///
/// Names with a numeric prefix come first in name order, followed by the
/// remaining names in name order.
///
/// # Errors
///
/// Returns an I/O error if `dir` cannot be listed.
pub fn find_diagrams(dir: &Path, files: &FilesConfig) -> Result<Vec<PathBuf>> {
    let mut names = Vec::new();
    for entry in fs::read_dir(dir)? {
        let entry = entry?;
        let Ok(name) = entry.file_name().into_string() else {
            continue;
        };
        if is_diagram_name(&name, files) && entry.path().is_file() {
            names.push(name);
        }
    }

    sort_diagram_names(&mut names);
    trace!(dir = dir.display().to_string(), count = names.len(); "Found diagrams");

    Ok(names.into_iter().map(|name| dir.join(name)).collect())
}

/// Sorts diagram file names: prefixed names first, then the rest.
pub fn sort_diagram_names(names: &mut [String]) {
    names.sort_by(|a, b| {
        let unnumbered = |name: &str| !has_numeric_prefix(name);
        unnumbered(a).cmp(&unnumbered(b)).then_with(|| a.cmp(b))
    });
}

/// Returns `true` if `dir` or any non-excluded descendant holds a diagram.
///
/// The walk is depth-first and stops at the first diagram found. Symlinked
/// diagram files count, matching [`find_diagrams`].
pub fn contains_diagrams(dir: &Path, files: &FilesConfig) -> bool {
    WalkDir::new(dir)
        .into_iter()
        .filter_entry(|entry| {
            entry.depth() == 0
                || !entry.file_type().is_dir()
                || !is_excluded_dir(entry_name(entry), files)
        })
        .filter_map(|entry| entry.ok())
        .any(|entry| is_diagram_name(entry_name(&entry), files) && entry.path().is_file())
}

/// Lists the immediate subdirectories of `dir` that lead to diagrams.
///
/// Returns directory names sorted by name. Hidden directories and the
/// rendered image directory are skipped, as are subdirectories without a
/// diagram anywhere beneath them.
///
/// # Errors
///
/// Returns an I/O error if `dir` cannot be listed.
pub fn subdirectories(dir: &Path, files: &FilesConfig) -> Result<Vec<String>> {
    let mut names = Vec::new();
    for entry in fs::read_dir(dir)? {
        let entry = entry?;
        let path = entry.path();
        let Ok(name) = entry.file_name().into_string() else {
            continue;
        };
        if path.is_dir() && !is_excluded_dir(&name, files) && contains_diagrams(&path, files) {
            names.push(name);
        }
    }

    names.sort();
    Ok(names)
}

/// Reads `path` and returns its trimmed content if the file exists and is
/// not blank.
///
/// # Errors
///
/// Returns an I/O error if the file exists but cannot be read.
pub fn read_trimmed(path: &Path) -> Result<Option<String>> {
    if path.is_dir() {
        return Ok(None);
    }
    match fs::read_to_string(path) {
        Ok(content) => {
            let content = content.trim();
            Ok((!content.is_empty()).then(|| content.to_string()))
        }
        Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(None),
        Err(err) => Err(err.into()),
    }
}

/// Returns the companion text for a diagram file.
///
/// The companion shares the diagram's stem and uses the text extension. A
/// companion that would be the generated document itself is ignored.
///
/// # Errors
///
/// Returns an I/O error if the companion exists but cannot be read.
pub fn companion_content(diagram: &Path, files: &FilesConfig) -> Result<Option<String>> {
    let companion = diagram.with_extension(files.text_extension());
    if is_output(&companion, files) {
        return Ok(None);
    }
    read_trimmed(&companion)
}

/// Returns the description text for a directory.
///
/// `<dirname>.<text ext>` is consulted first, then the generic description
/// file. The first with non-blank content wins.
///
/// # Errors
///
/// Returns an I/O error if a candidate exists but cannot be read.
pub fn directory_description(dir: &Path, files: &FilesConfig) -> Result<Option<String>> {
    let mut candidates = Vec::with_capacity(2);
    if let Some(name) = dir.file_name().and_then(OsStr::to_str) {
        candidates.push(dir.join(format!("{name}.{}", files.text_extension())));
    }
    candidates.push(dir.join(files.directory_description()));

    for candidate in candidates {
        if is_output(&candidate, files) {
            continue;
        }
        if let Some(content) = read_trimmed(&candidate)? {
            debug!(path = candidate.display().to_string(); "Using directory description");
            return Ok(Some(content));
        }
    }

    Ok(None)
}

fn is_output(path: &Path, files: &FilesConfig) -> bool {
    path.file_name().and_then(OsStr::to_str) == Some(files.output())
}

/// Selects every directory under `root` that should get a document.
///
/// A directory is selected when it directly contains a diagram, a numbered
/// companion text file, or a directory description file (`<dirname>`,
/// `00-<dirname>`, or the generic description). Hidden directories and the
/// rendered image directory are not descended into.
///
/// Unreadable entries are skipped with a debug log; the returned set is
/// ordered by path.
pub fn scan_tree(root: &Path, files: &FilesConfig) -> BTreeSet<PathBuf> {
    let mut selected = BTreeSet::new();

    let walker = WalkDir::new(root)
        .sort_by_file_name()
        .into_iter()
        .filter_entry(|entry| {
            entry.depth() == 0
                || !entry.file_type().is_dir()
                || !is_excluded_dir(entry_name(entry), files)
        });

    for entry in walker {
        let entry = match entry {
            Ok(entry) => entry,
            Err(err) => {
                debug!(err:err; "Skipping unreadable entry");
                continue;
            }
        };
        if entry.file_type().is_dir() && directory_is_relevant(entry.path(), files) {
            selected.insert(entry.path().to_path_buf());
        }
    }

    debug!(count = selected.len(); "Scanned project tree");
    selected
}

fn directory_is_relevant(dir: &Path, files: &FilesConfig) -> bool {
    let Ok(entries) = fs::read_dir(dir) else {
        return false;
    };

    let dir_name = dir.file_name().and_then(OsStr::to_str).unwrap_or_default();
    let text_ext = files.text_extension();
    let description_names = [
        format!("{dir_name}.{text_ext}"),
        format!("00-{dir_name}.{text_ext}"),
        files.directory_description().to_string(),
    ];

    entries.filter_map(|entry| entry.ok()).any(|entry| {
        let Ok(name) = entry.file_name().into_string() else {
            return false;
        };
        if !entry.path().is_file() {
            return false;
        }

        let is_numbered_text = has_numeric_prefix(&name)
            && Path::new(&name).extension().and_then(OsStr::to_str) == Some(text_ext);

        is_diagram_name(&name, files) || is_numbered_text || description_names.contains(&name)
    })
}
