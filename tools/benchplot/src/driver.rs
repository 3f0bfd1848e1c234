//! Argument validation and chart dispatch.
//!
//! Validation runs in a fixed order: input exists, option is an integer,
//! option names a chart. Only then is the output directory created, so a
//! rejected invocation leaves nothing behind.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use benchplot_report::chart::{ChartKind, ChartOutcome};
use benchplot_report::output;
use benchplot_report::{BenchmarkRecord, ChartConfig, load_records, series};

use crate::cli::{Cli, OPTIONS_HINT};
use crate::verbose::{self, Timer, dprintln, vprintln};

/// Directory created next to the input file to hold the charts.
pub const CHARTS_DIR: &str = "charts";

/// Why an invocation failed. Every variant exits with status 1.
#[derive(Debug, thiserror::Error)]
pub enum Failure {
    /// Bad option value.
    #[error("{0}")]
    Usage(String),
    /// The results file does not exist.
    #[error("File not found: {}", .0.display())]
    NotFound(PathBuf),
    /// Anything that went wrong while loading or rendering.
    #[error("Error generating charts: {0:#}")]
    Chart(anyhow::Error),
}

/// Validate the invocation and generate the selected chart.
pub fn run(cli: &Cli) -> Result<(), Failure> {
    if !cli.results.exists() {
        return Err(Failure::NotFound(cli.results.clone()));
    }
    let kind = parse_option(&cli.option)?;

    let out_dir = output_dir(&cli.results);
    std::fs::create_dir_all(&out_dir)
        .with_context(|| format!("creating {}", out_dir.display()))
        .map_err(Failure::Chart)?;

    dprintln!("Generating charts from {}...", cli.results.display());
    generate(kind, &cli.results, &out_dir, &ChartConfig::default()).map_err(Failure::Chart)?;
    println!("All charts generated!");
    Ok(())
}

/// Parse the option argument into a chart kind.
pub fn parse_option(raw: &str) -> Result<ChartKind, Failure> {
    let option: i64 = raw.trim().parse().map_err(|_| {
        Failure::Usage(format!(
            "Option must be an integer (1, 2, or 3), got: {raw}"
        ))
    })?;
    ChartKind::from_option(option)
        .ok_or_else(|| Failure::Usage(format!("Invalid option {option}. Choose 1, 2, or 3")))
}

/// The chart directory for an input file: `charts/` beside it.
pub fn output_dir(input: &Path) -> PathBuf {
    match input.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent.join(CHARTS_DIR),
        _ => PathBuf::from(CHARTS_DIR),
    }
}

/// Print a failure to stderr the way the user should see it.
pub fn report(failure: &Failure) {
    match failure {
        Failure::Usage(_) => {
            verbose::error(failure);
            eprintln!("Usage: benchplot <RESULTS> <OPTION>");
            eprintln!("{OPTIONS_HINT}");
        }
        Failure::NotFound(_) => verbose::error(failure),
        Failure::Chart(err) => {
            verbose::error(failure);
            // Full cause chain, plus a backtrace when one was captured.
            eprintln!("\n{err:?}");
        }
    }
}

fn generate(kind: ChartKind, input: &Path, out_dir: &Path, config: &ChartConfig) -> Result<()> {
    let records = {
        let _t = Timer::start("load results");
        load_records(input).with_context(|| format!("loading {}", input.display()))?
    };
    vprintln!("  {} records loaded", records.len());

    dprintln!("Generating {} chart...", kind.name());
    if verbose::is_verbose() {
        print_data(kind, &records);
    }

    let outcome = {
        let _t = Timer::start("render");
        kind.render(&records, out_dir, config)?
    };
    match outcome {
        ChartOutcome::Written(path) => dprintln!("Saved: {}", path.display()),
        ChartOutcome::Skipped(reason) => verbose::warn(reason),
    }
    Ok(())
}

/// Print the data the chart is drawn from.
fn print_data(kind: ChartKind, records: &[BenchmarkRecord]) {
    println!();
    match kind {
        ChartKind::Throughput => {
            let series = series::throughput_series(records);
            print!("{}", output::series_table(&series, "Throughput", true));
        }
        ChartKind::Comparison => {
            if let Some(cmp) = series::comparison(records) {
                print!("{}", output::comparison_table(&cmp));
                if cmp.mixed_units {
                    println!("  Note: records use different units; labeling with '{}'", cmp.unit);
                }
            }
        }
        ChartKind::Memory => {
            let series = series::memory_series(records);
            print!("{}", output::series_table(&series, "Memory (MB)", false));
        }
    }
    println!();
}
