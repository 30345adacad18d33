//! Filesystem discovery under the scan root.
//!
//! A missing directory is reported on stderr and treated as empty; every
//! other I/O failure propagates to the caller. The existence check and the
//! listing that follows are not atomic.

use std::path::{Path, PathBuf};

use eyre::Result;
use walkdir::WalkDir;

/// List the immediate child directories of `root`, sorted by name.
pub fn find_directories(root: &Path) -> Result<Vec<String>> {
    if !root.exists() {
        eprintln!("Directory not found: {}", root.display());
        return Ok(Vec::new());
    }

    let mut directories = Vec::new();
    for entry in std::fs::read_dir(root)? {
        let entry = entry?;
        if entry.file_type()?.is_dir() {
            directories.push(entry.file_name().to_string_lossy().into_owned());
        }
    }

    directories.sort();
    Ok(directories)
}

/// Recursively collect the files under `start` whose path satisfies `filter`.
///
/// Traversal is depth-first with siblings visited in name order. The
/// predicate sees the full path, not just the base name.
pub fn find_files(start: &Path, filter: impl Fn(&Path) -> bool) -> Result<Vec<PathBuf>> {
    if !start.exists() {
        eprintln!("Directory not found: {}", start.display());
        return Ok(Vec::new());
    }

    let mut files = Vec::new();
    for entry in WalkDir::new(start).sort_by_file_name() {
        let entry = entry?;
        if entry.file_type().is_file() && filter(entry.path()) {
            files.push(entry.into_path());
        }
    }

    Ok(files)
}
