// crates/find_source_files/src/lib.rs

use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// File-name endings that may carry redaction markers.
pub const SOURCE_SUFFIXES: &[&str] = &[".c", ".h", ".S", "Makefile", ".ld"];

/// Recursively collects every regular file under `root` whose name ends in
/// one of [`SOURCE_SUFFIXES`], including symlinks that point at regular
/// files. The result is in path order.
///
/// Walk errors (unreadable directory, missing root) are returned, never skipped.
pub fn find_source_files<P: AsRef<Path>>(root: P) -> io::Result<Vec<PathBuf>> {
    SourceFileFinder::new(root.as_ref(), SOURCE_SUFFIXES).find()
}

/// Returns true if the file name ends with one of the given suffixes.
pub fn has_source_suffix(path: &Path, suffixes: &[&str]) -> bool {
    path.file_name()
        .and_then(|s| s.to_str())
        .map(|name| suffixes.iter().any(|suffix| name.ends_with(suffix)))
        .unwrap_or(false)
}

// === Private Implementation === //

struct SourceFileFinder<'a> {
    root: &'a Path,
    suffixes: &'a [&'a str],
}

impl<'a> SourceFileFinder<'a> {
    fn new(root: &'a Path, suffixes: &'a [&'a str]) -> Self {
        Self { root, suffixes }
    }

    fn find(&self) -> io::Result<Vec<PathBuf>> {
        let mut found = Vec::new();
        for entry in WalkDir::new(self.root).sort_by_file_name() {
            let entry = entry.map_err(io::Error::from)?;
            if entry.file_type().is_dir() {
                continue;
            }
            let path = entry.into_path();
            if !has_source_suffix(&path, self.suffixes) {
                log::debug!("skipping {}", path.display());
                continue;
            }
            // Links are not descended into, but a link to a regular file is
            // redacted like the file itself. A dangling link is an error.
            if fs::metadata(&path)?.is_file() {
                found.push(path);
            } else {
                log::debug!("skipping non-file {}", path.display());
            }
        }
        log::debug!("{} source file(s) under {}", found.len(), self.root.display());
        Ok(found)
    }
}
