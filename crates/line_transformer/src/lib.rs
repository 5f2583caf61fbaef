// crates/line_transformer/src/lib.rs

//! Rewrites instructor-only regions of a source file, line by line.
//!
//! Recognised markers (see the `student_markers` crate):
//!   - `!STUDENT_DONOT_SEE` hides its own line. A run of such lines becomes
//!     one placeholder.
//!   - `!STUDENT_DONOT_BEGIN` / `!STUDENT_DONOT_END` hide everything between
//!     them, both marker lines included, and leave one placeholder behind.
//!   - `XXXX //!STUDENT_WILL_SEE_AS (YYYY)` becomes `YYYY /* TODO: replace this */`.
//!
//! The transformation is pure. Reading and writing files is up to the caller.

use std::fmt;

mod error;
mod scanner;

pub use error::TransformError;
pub use student_markers::CommentStyle;

use scanner::Scanner;

/// What happens to hidden content.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Mode {
    /// Compute the result and the affected count; callers never persist it.
    DryRun,
    /// Keep hidden lines as comments, followed by the placeholder.
    Comment,
    /// Drop hidden lines, keep only placeholders and replacements.
    Remove,
}

impl Mode {
    /// Whether a caller may write the result back to disk.
    pub fn persists(self) -> bool {
        !matches!(self, Mode::DryRun)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Mode::DryRun => "dry-run",
            Mode::Comment => "comment",
            Mode::Remove => "remove",
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Result of a successful pass.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Transformed {
    /// Output lines, each carrying its own terminator (if any).
    pub lines: Vec<String>,
    /// Number of source lines consumed by a marker rule.
    pub affected: usize,
}

impl Transformed {
    /// Concatenates the output lines back into file content.
    pub fn to_text(&self) -> String {
        self.lines.concat()
    }
}

/// Splits file content into lines, keeping each line's `\n`.
pub fn split_lines(content: &str) -> Vec<&str> {
    content.split_inclusive('\n').collect()
}

/// Transforms `lines` using `//`-style comments.
pub fn transform<S: AsRef<str>>(lines: &[S], mode: Mode) -> Result<Transformed, TransformError> {
    transform_with_style(lines, mode, CommentStyle::default())
}

/// Transforms `lines` with an explicit comment style.
///
/// On a structural error nothing is returned but the error; partial output
/// is never exposed.
pub fn transform_with_style<S: AsRef<str>>(
    lines: &[S],
    mode: Mode,
    style: CommentStyle,
) -> Result<Transformed, TransformError> {
    let mut scanner = Scanner::new(mode, style);
    for (idx, line) in lines.iter().enumerate() {
        scanner.feed(idx + 1, line.as_ref())?;
    }
    let transformed = scanner.finish()?;
    log::debug!(
        "{} of {} line(s) affected ({} mode, {:?} comments)",
        transformed.affected,
        lines.len(),
        mode,
        style
    );
    Ok(transformed)
}
