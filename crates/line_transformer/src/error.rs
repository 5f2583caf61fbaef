// crates/line_transformer/src/error.rs

use student_markers::{DONOT_BEGIN, DONOT_END};
use thiserror::Error;

/// Structural problems with block markers. Each one is fatal for the file.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TransformError {
    #[error("nested or unmatched {begin} at line {line}", begin = DONOT_BEGIN)]
    NestedBlock { line: usize },

    #[error("{end} found without matching {begin} at line {line}", end = DONOT_END, begin = DONOT_BEGIN)]
    UnmatchedEnd { line: usize },

    #[error("{begin} without matching {end} (started at line {opened_at})", begin = DONOT_BEGIN, end = DONOT_END)]
    UnterminatedBlock { opened_at: usize },
}

impl TransformError {
    /// 1-based line number the error points at.
    pub fn line(&self) -> usize {
        match self {
            TransformError::NestedBlock { line } | TransformError::UnmatchedEnd { line } => *line,
            TransformError::UnterminatedBlock { opened_at } => *opened_at,
        }
    }
}
