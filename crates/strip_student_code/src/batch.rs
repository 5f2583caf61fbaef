// crates/strip_student_code/src/batch.rs

use crate::file_processor::{process_file, FileOutcome, ProcessError, Sink};
use find_source_files::find_source_files;
use line_transformer::Mode;
use std::path::Path;

/// Everything a directory run produced, in processing order.
#[derive(Debug, Default)]
pub struct BatchReport {
    /// Files processed successfully before the run ended.
    pub outcomes: Vec<FileOutcome>,
    /// The error that stopped the run, if any.
    pub failure: Option<ProcessError>,
}

impl BatchReport {
    pub fn is_success(&self) -> bool {
        self.failure.is_none()
    }
}

/// Redacts every recognised source file under `root`, rewriting files in
/// place unless `mode` is dry-run.
///
/// Files are handled one after another. The first failure (walk, read,
/// write or marker structure) stops the run; later files stay untouched.
pub fn process_directory(root: &Path, mode: Mode) -> BatchReport {
    let mut report = BatchReport::default();

    let files = match find_source_files(root) {
        Ok(files) => files,
        Err(source) => {
            report.failure = Some(ProcessError::Walk {
                path: root.to_path_buf(),
                source,
            });
            return report;
        }
    };
    log::info!("processing {} file(s) under {} ({} mode)", files.len(), root.display(), mode);

    for path in files {
        match process_file(&path, mode, Sink::InPlace) {
            Ok(outcome) => report.outcomes.push(outcome),
            Err(err) => {
                log::warn!("stopping after failure in {}", path.display());
                report.failure = Some(err);
                break;
            }
        }
    }

    report
}
