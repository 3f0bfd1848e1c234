//! Chart generation for microbenchmark result files.
//!
//! Provides deserialization of harness result records, grouping of records
//! into per-benchmark series, PNG rendering of throughput, comparison and
//! memory charts, and terminal tables of the derived data.
//!
//! Used by the `benchplot` command-line tool.

pub mod chart;
pub mod config;
pub mod load;
pub mod output;
pub mod record;
pub mod series;

pub use chart::{ChartKind, ChartOutcome, SkipReason};
pub use config::ChartConfig;
pub use load::{LoadError, load_records, parse_records};
pub use record::BenchmarkRecord;
