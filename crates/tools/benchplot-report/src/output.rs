//! Terminal tables of the data behind a chart.

use std::fmt::Write;

use crate::series::{Comparison, Series};

/// Format grouped series as an aligned table.
///
/// `value_header` names the value column; the error column is left out when
/// `with_error` is false.
pub fn series_table(series: &[Series], value_header: &str, with_error: bool) -> String {
    let mut out = String::new();
    if series.is_empty() {
        out.push_str("  No series to display.\n");
        return out;
    }

    let max_name = series
        .iter()
        .map(|s| s.name.chars().count())
        .max()
        .unwrap_or(9)
        .max(9);
    let value_width = value_header.chars().count().max(12);

    let _ = write!(
        out,
        "  {:<width$}  {:>10}  {:>vw$}",
        "Benchmark",
        "Rows",
        value_header,
        width = max_name,
        vw = value_width
    );
    if with_error {
        let _ = write!(out, "  {:>12}", "Error");
    }
    out.push('\n');
    let _ = write!(
        out,
        "  {:-<width$}  {:->10}  {:->vw$}",
        "",
        "",
        "",
        width = max_name,
        vw = value_width
    );
    if with_error {
        let _ = write!(out, "  {:->12}", "");
    }
    out.push('\n');

    for s in series {
        for p in &s.points {
            let _ = write!(
                out,
                "  {:<width$}  {:>10}  {:>vw$.3}",
                s.name,
                p.rows,
                p.value,
                width = max_name,
                vw = value_width
            );
            if with_error {
                let _ = write!(out, "  {:>12.3}", p.error);
            }
            out.push('\n');
        }
    }
    out
}

/// Format a library comparison as a matrix: one row per library, one column
/// per input size.
pub fn comparison_table(cmp: &Comparison) -> String {
    let mut out = String::new();
    let max_name = cmp
        .libraries
        .iter()
        .map(|name| name.chars().count())
        .max()
        .unwrap_or(7)
        .max(7);
    let col = cmp
        .rows
        .iter()
        .map(|r| r.to_string().len())
        .max()
        .unwrap_or(0)
        .max(12);

    let _ = write!(out, "  {:<width$}", "Library", width = max_name);
    for rows in &cmp.rows {
        let _ = write!(out, "  {rows:>col$}");
    }
    out.push('\n');
    let _ = write!(out, "  {:-<width$}", "", width = max_name);
    for _ in &cmp.rows {
        let _ = write!(out, "  {:->col$}", "");
    }
    out.push('\n');

    for (name, scores) in cmp.libraries.iter().zip(&cmp.scores) {
        let _ = write!(out, "  {name:<max_name$}");
        for score in scores {
            let _ = write!(out, "  {score:>col$.3}");
        }
        out.push('\n');
    }
    if !cmp.unit.is_empty() {
        let _ = writeln!(out, "  Unit: {}", cmp.unit);
    }
    out
}
