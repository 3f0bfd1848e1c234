//! Grouping of records into chart data.
//!
//! Groups keep the order in which their name first appears in the input;
//! points inside a group are ordered by `rows`.

use std::collections::{BTreeMap, BTreeSet};

use indexmap::IndexMap;

use crate::record::BenchmarkRecord;

/// One data point of a series.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    /// Input size.
    pub rows: u64,
    /// Measured value.
    pub value: f64,
    /// Error margin of `value` (zero when not applicable).
    pub error: f64,
}

impl Point {
    /// Create a point.
    pub fn new(rows: u64, value: f64, error: f64) -> Self {
        Self { rows, value, error }
    }
}

/// A named group of points sorted ascending by `rows`.
#[derive(Debug, Clone, PartialEq)]
pub struct Series {
    /// Benchmark display name.
    pub name: String,
    /// Points, sorted by `rows`.
    pub points: Vec<Point>,
}

/// Score of every library at every input size, for grouped bar charts.
#[derive(Debug, Clone, PartialEq)]
pub struct Comparison {
    /// Library names in order of first appearance.
    pub libraries: Vec<String>,
    /// Union of input sizes over all records, ascending.
    pub rows: Vec<u64>,
    /// `scores[library][rows]`, indexed like `libraries` and `rows`. Pairs
    /// without data are 0; duplicate pairs are averaged.
    pub scores: Vec<Vec<f64>>,
    /// Score unit of the first record.
    pub unit: String,
    /// Whether any record reports a unit different from `unit`.
    pub mixed_units: bool,
}

impl Comparison {
    /// Score of `library` at `rows`, if both are part of the comparison.
    pub fn score(&self, library: &str, rows: u64) -> Option<f64> {
        let lib = self.libraries.iter().position(|l| l == library)?;
        let col = self.rows.iter().position(|&r| r == rows)?;
        Some(self.scores[lib][col])
    }
}

/// Primary score and error per record, grouped by benchmark name.
pub fn throughput_series(records: &[BenchmarkRecord]) -> Vec<Series> {
    group(records.iter().map(|rec| {
        (
            rec.name(),
            Point::new(rec.rows, rec.primary.score, rec.primary.score_error),
        )
    }))
}

/// Allocation rate in megabytes per record, grouped by benchmark name.
///
/// Records without a usable allocation metric are left out.
pub fn memory_series(records: &[BenchmarkRecord]) -> Vec<Series> {
    group(
        records
            .iter()
            .filter_map(|rec| Some((rec.name(), Point::new(rec.rows, rec.alloc_rate_mb()?, 0.0)))),
    )
}

/// Library-by-size score matrix. Returns `None` when there are no records.
pub fn comparison(records: &[BenchmarkRecord]) -> Option<Comparison> {
    let first = records.first()?;

    let mut sums: IndexMap<&str, BTreeMap<u64, (f64, u32)>> = IndexMap::new();
    let mut all_rows = BTreeSet::new();
    for rec in records {
        let entry = sums
            .entry(rec.name())
            .or_default()
            .entry(rec.rows)
            .or_insert((0.0, 0));
        entry.0 += rec.primary.score;
        entry.1 += 1;
        all_rows.insert(rec.rows);
    }

    let rows: Vec<u64> = all_rows.into_iter().collect();
    let scores = sums
        .values()
        .map(|by_rows| {
            rows.iter()
                .map(|r| {
                    by_rows
                        .get(r)
                        .map_or(0.0, |&(sum, count)| sum / f64::from(count))
                })
                .collect()
        })
        .collect();

    let unit = first.primary.score_unit.clone();
    let mixed_units = records.iter().any(|rec| rec.primary.score_unit != unit);

    Some(Comparison {
        libraries: sums.keys().map(|name| (*name).to_string()).collect(),
        rows,
        scores,
        unit,
        mixed_units,
    })
}

fn group<'a>(points: impl Iterator<Item = (&'a str, Point)>) -> Vec<Series> {
    let mut groups: IndexMap<&str, Vec<Point>> = IndexMap::new();
    for (name, point) in points {
        groups.entry(name).or_default().push(point);
    }

    groups
        .into_iter()
        .map(|(name, mut points)| {
            points.sort_by_key(|p| p.rows);
            Series {
                name: name.to_string(),
                points,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::load::parse_records;
    use pretty_assertions::assert_eq;

    fn records(json: &str) -> Vec<BenchmarkRecord> {
        parse_records(json).unwrap()
    }

    fn scored(benchmark: &str, rows: u64, score: f64) -> String {
        format!(
            r#"{{ "benchmark": "{benchmark}", "params": {{ "rows": "{rows}" }},
                 "primaryMetric": {{ "score": {score}, "scoreError": 0, "scoreUnit": "ops/s" }} }}"#
        )
    }

    #[test]
    fn throughput_sorted_by_rows() {
        let recs = records(
            r#"[
                { "benchmark": "x.A", "params": { "rows": "20" },
                  "primaryMetric": { "score": 200, "scoreError": 2 } },
                { "benchmark": "x.A", "params": { "rows": "10" },
                  "primaryMetric": { "score": 100, "scoreError": 1 } }
            ]"#,
        );

        let series = throughput_series(&recs);
        assert_eq!(
            series,
            vec![Series {
                name: "A".into(),
                points: vec![Point::new(10, 100.0, 1.0), Point::new(20, 200.0, 2.0)],
            }]
        );
    }

    #[test]
    fn throughput_groups_in_first_appearance_order() {
        let recs = records(&format!(
            "[{}, {}, {}]",
            scored("p.Zeta", 1, 1.0),
            scored("p.Alpha", 1, 2.0),
            scored("q.Zeta", 2, 3.0)
        ));

        let series = throughput_series(&recs);
        let names: Vec<&str> = series.iter().map(|s| s.name.as_str()).collect();
        assert_eq!(names, ["Zeta", "Alpha"]);
        // Same display name from different classes lands in one group.
        assert_eq!(series[0].points.len(), 2);
    }

    #[test]
    fn throughput_missing_rows_is_zero() {
        let recs = records(r#"[{ "benchmark": "x.A", "primaryMetric": { "score": 5 } }]"#);
        assert_eq!(throughput_series(&recs)[0].points, vec![Point::new(0, 5.0, 0.0)]);
    }

    #[test]
    fn throughput_empty() {
        assert!(throughput_series(&[]).is_empty());
    }

    #[test]
    fn comparison_fills_missing_with_zero() {
        let recs = records(&format!(
            "[{}, {}, {}]",
            scored("x.A", 10, 5.0),
            scored("x.B", 10, 7.0),
            scored("x.B", 20, 9.0)
        ));

        let cmp = comparison(&recs).unwrap();
        assert_eq!(cmp.libraries, ["A", "B"]);
        assert_eq!(cmp.rows, [10, 20]);
        assert_eq!(cmp.scores, vec![vec![5.0, 0.0], vec![7.0, 9.0]]);
        assert_eq!(cmp.score("A", 20), Some(0.0));
        assert_eq!(cmp.score("B", 20), Some(9.0));
        assert_eq!(cmp.score("C", 20), None);
        assert_eq!(cmp.unit, "ops/s");
        assert!(!cmp.mixed_units);
    }

    #[test]
    fn comparison_averages_duplicates() {
        let recs = records(&format!(
            "[{}, {}, {}]",
            scored("x.A", 10, 4.0),
            scored("y.A", 10, 8.0),
            scored("x.A", 5, 1.0)
        ));

        let cmp = comparison(&recs).unwrap();
        assert_eq!(cmp.rows, [5, 10]);
        assert_eq!(cmp.score("A", 10), Some(6.0));
        assert_eq!(cmp.score("A", 5), Some(1.0));
    }

    #[test]
    fn comparison_unit_from_first_record() {
        let recs = records(
            r#"[
                { "benchmark": "x.A", "primaryMetric": { "score": 1, "scoreUnit": "ops/ms" } },
                { "benchmark": "x.B", "primaryMetric": { "score": 1, "scoreUnit": "ops/s" } }
            ]"#,
        );

        let cmp = comparison(&recs).unwrap();
        assert_eq!(cmp.unit, "ops/ms");
        assert!(cmp.mixed_units);
    }

    #[test]
    fn comparison_empty() {
        assert_eq!(comparison(&[]), None);
    }

    #[test]
    fn memory_converts_and_excludes() {
        let recs = records(
            r#"[
                { "benchmark": "x.A", "params": { "rows": "20" },
                  "secondaryMetrics": { "gc.alloc.rate.norm": { "score": 2097152 } } },
                { "benchmark": "x.A", "params": { "rows": "10" },
                  "secondaryMetrics": { "gc.alloc.rate": { "score": 500 } } },
                { "benchmark": "x.B", "params": { "rows": "10" },
                  "secondaryMetrics": { "gc.count": { "score": 3 } } }
            ]"#,
        );

        let series = memory_series(&recs);
        assert_eq!(
            series,
            vec![Series {
                name: "A".into(),
                points: vec![Point::new(10, 500.0, 0.0), Point::new(20, 2.0, 0.0)],
            }]
        );
    }

    #[test]
    fn memory_without_profiler_is_empty() {
        let recs = records(&format!("[{}]", scored("x.A", 10, 5.0)));
        assert!(memory_series(&recs).is_empty());
    }
}
