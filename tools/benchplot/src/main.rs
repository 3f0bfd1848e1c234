//! Benchmark chart generator.
//!
//! Reads a microbenchmark results file (a JSON array of records) and renders
//! one chart into a `charts/` directory beside it.
//!
//! Usage:
//!   benchplot results.json 1   - throughput vs. rows, with error bars
//!   benchplot results.json 2   - library comparison as clustered bars
//!   benchplot results.json 3   - allocation rate vs. rows (needs GC profiler data)

mod cli;
mod driver;
mod verbose;

use std::process::ExitCode;

use clap::Parser;
use clap::error::ErrorKind;

fn main() -> ExitCode {
    let cli = match cli::Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => return argument_error(&err),
    };
    verbose::init(cli.quiet, cli.verbose);

    match driver::run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(failure) => {
            driver::report(&failure);
            ExitCode::FAILURE
        }
    }
}

/// Report a command-line parse error. Help and version requests succeed;
/// everything else exits with status 1.
fn argument_error(err: &clap::Error) -> ExitCode {
    let _ = err.print();
    match err.kind() {
        ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => ExitCode::SUCCESS,
        _ => {
            eprintln!("{}", cli::OPTIONS_HINT);
            ExitCode::FAILURE
        }
    }
}
