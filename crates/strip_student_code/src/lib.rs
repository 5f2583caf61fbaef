// crates/strip_student_code/src/lib.rs

//! Strips instructor-only code from course material before it is handed
//! to students. The line rewriting itself lives in `line_transformer`;
//! this crate reads and writes files, walks directories and reports.

pub mod batch;
pub mod config;
pub mod file_processor;
pub mod summary;

pub use batch::{process_directory, BatchReport};
pub use config::{ModeArg, RunConfig};
pub use file_processor::{process_file, write_atomically, FileOutcome, ProcessError, Sink};
pub use summary::Summary;
