// crates/strip_student_code/src/file_processor.rs

use line_transformer::{split_lines, transform_with_style, CommentStyle, Mode, TransformError};
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;
use thiserror::Error;

/// Where the transformed content of a file goes.
pub enum Sink<'a> {
    /// Stream the output to a writer; the file itself is never touched.
    Stream(&'a mut dyn Write),
    /// Rewrite the file when the mode persists and something changed.
    InPlace,
}

/// Per-file result, collected by the caller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileOutcome {
    pub path: PathBuf,
    /// Lines consumed by a marker rule.
    pub affected: usize,
    /// Whether the file on disk was rewritten.
    pub written: bool,
}

#[derive(Debug, Error)]
pub enum ProcessError {
    #[error("failed to read file: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to write file: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to write output: {source}")]
    Output {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to walk directory: {source}")]
    Walk {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("{source}")]
    Transform {
        path: PathBuf,
        #[source]
        source: TransformError,
    },
}

impl ProcessError {
    /// The file (or directory) the error belongs to.
    pub fn path(&self) -> &Path {
        match self {
            ProcessError::Read { path, .. }
            | ProcessError::Write { path, .. }
            | ProcessError::Output { path, .. }
            | ProcessError::Walk { path, .. }
            | ProcessError::Transform { path, .. } => path,
        }
    }
}

/// Comment style for a path, based on its file name.
pub fn comment_style_for(path: &Path) -> CommentStyle {
    path.file_name()
        .and_then(|s| s.to_str())
        .map(CommentStyle::for_file_name)
        .unwrap_or_default()
}

/// Reads `path`, transforms it with `mode` and hands the result to `sink`.
///
/// The whole file is read before anything is transformed. On a structural
/// error nothing is written anywhere.
pub fn process_file(path: &Path, mode: Mode, sink: Sink<'_>) -> Result<FileOutcome, ProcessError> {
    let content = fs::read_to_string(path).map_err(|source| ProcessError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    let lines = split_lines(&content);
    let transformed =
        transform_with_style(&lines, mode, comment_style_for(path)).map_err(|source| ProcessError::Transform {
            path: path.to_path_buf(),
            source,
        })?;

    let written = match sink {
        Sink::Stream(out) => {
            out.write_all(transformed.to_text().as_bytes())
                .and_then(|_| out.flush())
                .map_err(|source| ProcessError::Output {
                    path: path.to_path_buf(),
                    source,
                })?;
            false
        }
        Sink::InPlace if mode.persists() && transformed.affected > 0 => {
            write_atomically(path, &transformed.to_text()).map_err(|source| ProcessError::Write {
                path: path.to_path_buf(),
                source,
            })?;
            true
        }
        Sink::InPlace => false,
    };

    log::debug!(
        "{}: {} line(s) affected, written: {}",
        path.display(),
        transformed.affected,
        written
    );

    Ok(FileOutcome {
        path: path.to_path_buf(),
        affected: transformed.affected,
        written,
    })
}

/// Replaces the contents of `path` in one step: the new content goes to a
/// temporary file next to the target, which is then renamed over it.
/// Readers see either the old or the new file, never a mix. When `path` is
/// a symlink the file it points at is replaced and the link stays.
pub fn write_atomically(path: &Path, contents: &str) -> io::Result<()> {
    let target = match fs::canonicalize(path) {
        Ok(resolved) => resolved,
        Err(err) if err.kind() == io::ErrorKind::NotFound => path.to_path_buf(),
        Err(err) => return Err(err),
    };
    let dir = match target.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    let mut tmp = NamedTempFile::new_in(dir)?;
    tmp.write_all(contents.as_bytes())?;
    tmp.as_file().sync_all()?;
    if let Ok(meta) = fs::metadata(&target) {
        fs::set_permissions(tmp.path(), meta.permissions())?;
    }
    tmp.persist(&target).map_err(|err| err.error)?;
    Ok(())
}
