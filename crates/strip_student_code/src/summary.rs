// crates/strip_student_code/src/summary.rs

use crate::file_processor::FileOutcome;
use std::fmt;
use std::path::PathBuf;

/// Totals for a run, built after all files have been processed.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Summary {
    pub files_processed: usize,
    pub files_changed: usize,
    /// Files with at least one affected line, in processing order.
    pub changed: Vec<(PathBuf, usize)>,
}

impl Summary {
    pub fn from_outcomes<'a, I>(outcomes: I) -> Self
    where
        I: IntoIterator<Item = &'a FileOutcome>,
    {
        let mut summary = Summary::default();
        for outcome in outcomes {
            summary.files_processed += 1;
            if outcome.affected > 0 {
                summary.files_changed += 1;
                summary.changed.push((outcome.path.clone(), outcome.affected));
            }
        }
        summary
    }
}

impl fmt::Display for Summary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Summary:")?;
        writeln!(f, "Total files processed: {}", self.files_processed)?;
        writeln!(f, "Total files changed: {}", self.files_changed)?;
        for (path, affected) in &self.changed {
            writeln!(f, "{}: {} lines removed", path.display(), affected)?;
        }
        Ok(())
    }
}
