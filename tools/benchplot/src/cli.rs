//! Command-line interface definitions for benchplot.

use std::path::PathBuf;

use clap::Parser;

/// Hint printed after any argument error.
pub const OPTIONS_HINT: &str = "Options: 1 (throughput), 2 (comparison), 3 (memory)";

/// Render charts from microbenchmark JSON results.
///
/// Charts are written to a `charts/` directory next to the results file.
#[derive(Debug, Parser)]
#[command(name = "benchplot", version, about)]
pub struct Cli {
    /// JSON file containing an array of benchmark result records.
    #[arg(value_name = "RESULTS")]
    pub results: PathBuf,

    /// Chart to generate: 1 (throughput), 2 (comparison), 3 (memory).
    ///
    /// Kept as text so that a non-numeric value gets its own diagnostic.
    #[arg(value_name = "OPTION", allow_hyphen_values = true)]
    pub option: String,

    /// Print only errors and the final result line.
    #[arg(long, short = 'q', conflicts_with = "verbose")]
    pub quiet: bool,

    /// Also print load timings and the data behind the chart.
    #[arg(long, short = 'v')]
    pub verbose: bool,
}
