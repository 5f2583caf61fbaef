// crates/strip_student_code/src/main.rs

use anyhow::{Context, Result};
use clap::Parser;
use std::io::{self, Write};
use std::process::ExitCode;

use strip_student_code::{process_directory, process_file, ProcessError, RunConfig, Sink, Summary};

fn main() -> ExitCode {
    let config = RunConfig::parse();
    init_logging(config.verbose);

    match run(&config) {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::FAILURE,
        Err(err) => {
            eprintln!("Error: {:#}", err);
            ExitCode::FAILURE
        }
    }
}

/// `--verbose` raises the default filter; `RUST_LOG` still wins.
fn init_logging(verbose: bool) {
    let default_filter = if verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .format_timestamp(None)
        .init();
}

/// Returns Ok(false) when a file failed and the run was stopped.
fn run(config: &RunConfig) -> Result<bool> {
    let mode = config.mode();
    let mut outcomes = Vec::new();
    let mut succeeded = true;

    // Single file: output always goes to stdout, the file is left alone.
    if let Some(file) = &config.input_file {
        let stdout = io::stdout();
        let mut handle = stdout.lock();
        match process_file(file, mode, Sink::Stream(&mut handle)) {
            Ok(outcome) => {
                eprintln!("Processed {}, lines removed: {}", file.display(), outcome.affected);
                outcomes.push(outcome);
            }
            Err(err) => {
                report_failure(&err);
                succeeded = false;
            }
        }
    }

    if succeeded {
        if let Some(dir) = &config.directory {
            let report = process_directory(dir, mode);
            for outcome in report.outcomes.iter().filter(|o| o.affected > 0) {
                println!("Processed {}, lines removed: {}", outcome.path.display(), outcome.affected);
            }
            if let Some(err) = &report.failure {
                report_failure(err);
                succeeded = false;
            }
            outcomes.extend(report.outcomes);
        }
    }

    io::stdout().flush().context("Failed to flush standard output")?;
    eprint!("\n{}", Summary::from_outcomes(&outcomes));

    Ok(succeeded)
}

fn report_failure(err: &ProcessError) {
    eprintln!("Processing failed for {}: {}", err.path().display(), err);
}
