//! Benchmark result records.
//!
//! The harness writes one JSON object per measured benchmark/parameter
//! combination. Only the fields the charts read are modeled; every one of
//! them is optional in the input and receives a default at deserialization
//! time, so the chart code never has to deal with missing data:
//!
//! | field                        | default                          |
//! |------------------------------|----------------------------------|
//! | `benchmark`, `mode`          | empty string                     |
//! | `params`                     | empty map                        |
//! | `params.rows`                | `0` (also when not an integer)   |
//! | `primaryMetric.score[Error]` | `0.0` (also for `"NaN"`)         |
//! | `primaryMetric.scoreUnit`    | empty string                     |
//! | `secondaryMetrics`           | empty map                        |

use std::collections::BTreeMap;

use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// Secondary metric keys carrying the allocation rate, in lookup order.
///
/// Depending on the harness version the profiler metrics are prefixed with a
/// middle dot.
pub const ALLOC_RATE_KEYS: [&str; 4] = [
    "gc.alloc.rate.norm",
    "\u{b7}gc.alloc.rate.norm",
    "gc.alloc.rate",
    "\u{b7}gc.alloc.rate",
];

/// Allocation values above this are byte counts; at or below it they are
/// already megabytes.
pub const BYTES_PER_MB: f64 = 1_048_576.0;

/// One measured benchmark run.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(from = "RawRecord")]
pub struct BenchmarkRecord {
    /// Fully qualified benchmark identifier, e.g. `pkg.ExportBenchmark.easyPojo`.
    pub benchmark: String,
    /// Benchmark mode, e.g. `thrpt`.
    pub mode: String,
    /// Benchmark parameters as strings.
    pub params: BTreeMap<String, String>,
    /// Input size taken from `params.rows`.
    pub rows: u64,
    /// Main measurement.
    pub primary: PrimaryMetric,
    /// Auxiliary measurements keyed by metric name.
    pub secondary: BTreeMap<String, SecondaryMetric>,
}

/// Main score of a record and its error margin.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PrimaryMetric {
    /// Score, e.g. operations per second.
    #[serde(deserialize_with = "lenient_f64")]
    pub score: f64,
    /// Error margin of the score.
    #[serde(deserialize_with = "lenient_f64")]
    pub score_error: f64,
    /// Unit of `score`, e.g. `ops/s`.
    pub score_unit: String,
}

/// An auxiliary measurement such as a GC profiler counter.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SecondaryMetric {
    /// Measured value.
    #[serde(deserialize_with = "lenient_f64")]
    pub score: f64,
    /// Unit of `score`.
    pub score_unit: String,
}

impl BenchmarkRecord {
    /// Display name: the last dot-separated segment of the identifier.
    pub fn name(&self) -> &str {
        self.benchmark.rsplit('.').next().unwrap_or(self.benchmark.as_str())
    }

    /// Allocation rate in megabytes, if the record carries a usable one.
    ///
    /// The first key of [`ALLOC_RATE_KEYS`] present in the record decides;
    /// later keys are not consulted even when that value is unusable.
    pub fn alloc_rate_mb(&self) -> Option<f64> {
        let raw = ALLOC_RATE_KEYS
            .iter()
            .find_map(|key| self.secondary.get(*key))?
            .score;
        normalize_alloc_rate(raw)
    }
}

/// Convert a raw allocation value to megabytes. Returns `None` for `<= 0`.
pub fn normalize_alloc_rate(raw: f64) -> Option<f64> {
    if raw <= 0.0 {
        None
    } else if raw > BYTES_PER_MB {
        Some(raw / BYTES_PER_MB)
    } else {
        Some(raw)
    }
}

/// Parse a `rows` parameter value. Anything but a non-negative integer is 0.
pub fn parse_rows(value: &str) -> u64 {
    value.trim().parse().unwrap_or(0)
}

/// Wire shape of a record before defaults are applied.
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawRecord {
    #[serde(default)]
    benchmark: Option<String>,
    #[serde(default)]
    mode: Option<String>,
    #[serde(default)]
    params: Option<BTreeMap<String, Value>>,
    #[serde(default)]
    primary_metric: Option<PrimaryMetric>,
    #[serde(default)]
    secondary_metrics: Option<BTreeMap<String, SecondaryMetric>>,
}

impl From<RawRecord> for BenchmarkRecord {
    fn from(raw: RawRecord) -> Self {
        let params: BTreeMap<String, String> = raw
            .params
            .unwrap_or_default()
            .into_iter()
            .map(|(key, value)| {
                let value = match value {
                    Value::String(s) => s,
                    other => other.to_string(),
                };
                (key, value)
            })
            .collect();
        let rows = params.get("rows").map_or(0, |v| parse_rows(v));

        Self {
            benchmark: raw.benchmark.unwrap_or_default(),
            mode: raw.mode.unwrap_or_default(),
            params,
            rows,
            primary: raw.primary_metric.unwrap_or_default(),
            secondary: raw.secondary_metrics.unwrap_or_default(),
        }
    }
}

/// Accept numbers and numeric strings; map everything else, including
/// non-finite values, to `0.0`.
fn lenient_f64<'de, D: Deserializer<'de>>(deserializer: D) -> Result<f64, D::Error> {
    let value = match Value::deserialize(deserializer)? {
        Value::Number(n) => n.as_f64().unwrap_or(0.0),
        Value::String(s) => s.trim().parse().unwrap_or(0.0),
        _ => 0.0,
    };
    Ok(if value.is_finite() { value } else { 0.0 })
}
