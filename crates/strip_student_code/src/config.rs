// crates/strip_student_code/src/config.rs

use clap::{ArgGroup, Parser, ValueEnum};
use line_transformer::Mode;
use std::path::PathBuf;

/// Mode as spelled on the command line.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum ModeArg {
    /// Report what would change, never write.
    #[value(name = "dry-run", alias = "preview")]
    DryRun,
    /// Comment out hidden lines and add placeholders.
    Comment,
    /// Delete hidden lines and add placeholders.
    Remove,
}

impl From<ModeArg> for Mode {
    fn from(arg: ModeArg) -> Self {
        match arg {
            ModeArg::DryRun => Mode::DryRun,
            ModeArg::Comment => Mode::Comment,
            ModeArg::Remove => Mode::Remove,
        }
    }
}

/// Runtime configuration, parsed from the command line.
#[derive(Clone, Debug, Parser)]
#[command(
    name = "strip_student_code",
    version,
    about = "Process C and asm files to remove specific lines or blocks."
)]
#[command(group(
    ArgGroup::new("target")
        .required(true)
        .multiple(true)
        .args(["input_file", "directory"])
))]
pub struct RunConfig {
    /// Specify the mode of operation.
    #[arg(long, value_enum)]
    pub mode: ModeArg,

    /// Specify a single file to process (output goes to stdout).
    #[arg(short = 'i', value_name = "FILE")]
    pub input_file: Option<PathBuf>,

    /// Specify a directory to process (files are rewritten in place).
    #[arg(short = 'd', value_name = "DIR")]
    pub directory: Option<PathBuf>,

    /// Enable verbose logging.
    #[arg(long)]
    pub verbose: bool,
}

impl RunConfig {
    pub fn mode(&self) -> Mode {
        self.mode.into()
    }
}
