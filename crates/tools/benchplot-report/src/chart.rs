//! PNG rendering of benchmark charts.
//!
//! Three charts are available, each written to a fixed file name inside the
//! output directory:
//!
//! - throughput per benchmark against input size, with error bars
//! - clustered bars comparing libraries at every input size
//! - allocation rate per benchmark against input size
//!
//! A chart without data is skipped rather than rendered empty; the caller
//! decides how to report that.

use std::fmt;
use std::ops::Range;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use plotters::coord::Shift;
use plotters::coord::types::RangedCoordf64;
use plotters::prelude::*;
use plotters::style::FontStyle;

use crate::config::{ChartConfig, FigureSize};
use crate::record::BenchmarkRecord;
use crate::series::{self, Comparison, Series};

/// Line colors, cycled per series.
const LINE_COLORS: [RGBColor; 10] = [
    RGBColor(31, 119, 180),
    RGBColor(255, 127, 14),
    RGBColor(44, 160, 44),
    RGBColor(214, 39, 40),
    RGBColor(148, 103, 189),
    RGBColor(140, 86, 75),
    RGBColor(227, 119, 194),
    RGBColor(127, 127, 127),
    RGBColor(188, 189, 34),
    RGBColor(23, 190, 207),
];

/// Pastel bar colors, cycled per library.
const BAR_COLORS: [RGBColor; 12] = [
    RGBColor(141, 211, 199),
    RGBColor(255, 255, 179),
    RGBColor(190, 186, 218),
    RGBColor(251, 128, 114),
    RGBColor(128, 177, 211),
    RGBColor(253, 180, 98),
    RGBColor(179, 222, 105),
    RGBColor(252, 205, 229),
    RGBColor(217, 217, 217),
    RGBColor(188, 128, 189),
    RGBColor(204, 235, 197),
    RGBColor(255, 237, 111),
];

const ROWS_DESC: &str = "Number of Rows";

/// Fraction of a category slot covered by its cluster of bars.
const CLUSTER_WIDTH: f64 = 0.8;

type Chart<'a, 'b> = ChartContext<'a, BitMapBackend<'b>, Cartesian2d<RangedCoordf64, RangedCoordf64>>;
type Area<'b> = DrawingArea<BitMapBackend<'b>, Shift>;

/// The chart types, selected on the command line by number.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChartKind {
    /// Throughput vs. input size (option 1).
    Throughput,
    /// Library comparison (option 2).
    Comparison,
    /// Allocation rate vs. input size (option 3).
    Memory,
}

impl ChartKind {
    /// All kinds in option order.
    pub const ALL: [Self; 3] = [Self::Throughput, Self::Comparison, Self::Memory];

    /// Map a command-line option to a chart kind.
    pub fn from_option(option: i64) -> Option<Self> {
        match option {
            1 => Some(Self::Throughput),
            2 => Some(Self::Comparison),
            3 => Some(Self::Memory),
            _ => None,
        }
    }

    /// Command-line option selecting this kind.
    pub fn option(self) -> u8 {
        match self {
            Self::Throughput => 1,
            Self::Comparison => 2,
            Self::Memory => 3,
        }
    }

    /// Short lowercase name.
    pub fn name(self) -> &'static str {
        match self {
            Self::Throughput => "throughput",
            Self::Comparison => "comparison",
            Self::Memory => "memory",
        }
    }

    /// Output file name inside the chart directory.
    pub fn file_name(self) -> &'static str {
        match self {
            Self::Throughput => "throughput.png",
            Self::Comparison => "comparison.png",
            Self::Memory => "memory.png",
        }
    }

    /// Render this chart from `records` into `out_dir`.
    pub fn render(
        self,
        records: &[BenchmarkRecord],
        out_dir: &Path,
        config: &ChartConfig,
    ) -> Result<ChartOutcome> {
        match self {
            Self::Throughput => throughput_chart(records, out_dir, config),
            Self::Comparison => comparison_chart(records, out_dir, config),
            Self::Memory => memory_chart(records, out_dir, config),
        }
    }
}

/// Result of a chart function that did not fail.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChartOutcome {
    /// The image was written to this path.
    Written(PathBuf),
    /// Nothing was written.
    Skipped(SkipReason),
}

/// Why a chart was not written.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
    /// The result set is empty.
    NoThroughputData,
    /// No library or input size to compare.
    NoComparisonData,
    /// No record carries an allocation metric.
    NoMemoryData,
}

impl fmt::Display for SkipReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::NoThroughputData => "No data found for throughput plot",
            Self::NoComparisonData => "No data found for comparison plot",
            Self::NoMemoryData => "No memory data found (requires GC profiler)",
        })
    }
}

/// Throughput per benchmark against input size, with error bars.
pub fn throughput_chart(
    records: &[BenchmarkRecord],
    out_dir: &Path,
    config: &ChartConfig,
) -> Result<ChartOutcome> {
    let series = series::throughput_series(records);
    if series.is_empty() {
        return Ok(ChartOutcome::Skipped(SkipReason::NoThroughputData));
    }

    let path = out_dir.join(ChartKind::Throughput.file_name());
    let plot = LinePlot {
        title: "Export Performance by Number of Rows",
        y_desc: "Throughput (operations/second)",
        size: config.throughput_size,
        line_pt: config.line_pt,
        error_bars: true,
    };
    draw_line_chart(&path, config, &plot, &series)
        .with_context(|| format!("rendering {}", path.display()))?;
    Ok(ChartOutcome::Written(path))
}

/// Clustered bars, one cluster per input size and one bar per library.
pub fn comparison_chart(
    records: &[BenchmarkRecord],
    out_dir: &Path,
    config: &ChartConfig,
) -> Result<ChartOutcome> {
    let Some(cmp) = series::comparison(records) else {
        return Ok(ChartOutcome::Skipped(SkipReason::NoComparisonData));
    };
    if cmp.libraries.is_empty() || cmp.rows.is_empty() {
        return Ok(ChartOutcome::Skipped(SkipReason::NoComparisonData));
    }

    let path = out_dir.join(ChartKind::Comparison.file_name());
    draw_comparison(&path, config, &cmp)
        .with_context(|| format!("rendering {}", path.display()))?;
    Ok(ChartOutcome::Written(path))
}

/// Allocation rate per benchmark against input size.
pub fn memory_chart(
    records: &[BenchmarkRecord],
    out_dir: &Path,
    config: &ChartConfig,
) -> Result<ChartOutcome> {
    let series = series::memory_series(records);
    if series.is_empty() {
        return Ok(ChartOutcome::Skipped(SkipReason::NoMemoryData));
    }

    let path = out_dir.join(ChartKind::Memory.file_name());
    let plot = LinePlot {
        title: "Memory Consumption Comparison",
        y_desc: "Memory Allocation (MB)",
        size: config.memory_size,
        line_pt: config.line_pt * 4.0 / 3.0,
        error_bars: false,
    };
    draw_line_chart(&path, config, &plot, &series)
        .with_context(|| format!("rendering {}", path.display()))?;
    Ok(ChartOutcome::Written(path))
}

// ---------------------------------------------------------------------------
// Line charts
// ---------------------------------------------------------------------------

struct LinePlot<'s> {
    title: &'s str,
    y_desc: &'s str,
    size: FigureSize,
    line_pt: f64,
    error_bars: bool,
}

fn draw_line_chart(
    path: &Path,
    config: &ChartConfig,
    plot: &LinePlot<'_>,
    series: &[Series],
) -> Result<()> {
    let root = BitMapBackend::new(path, config.pixels(plot.size)).into_drawing_area();
    root.fill(&WHITE)?;

    let mut chart = cartesian(
        &root,
        config,
        plot.title,
        x_range(series),
        y_range(series, plot.error_bars),
    )?;
    draw_mesh(
        &mut chart,
        config,
        &Axes {
            y_desc: plot.y_desc,
            x_fmt: &format_rows,
            x_labels: 10,
            x_grid: true,
            x_ticks: true,
        },
    )?;

    let stroke = config.px(plot.line_pt);
    let marker = px_i32(config.px(3.0));
    let cap = config.px(5.0);
    let (legend_len, legend_area) = legend_swatch(config);

    for (idx, s) in series.iter().enumerate() {
        let color = LINE_COLORS[idx % LINE_COLORS.len()];
        let data: Vec<(f64, f64)> = s
            .points
            .iter()
            .map(|p| (rows_f64(p.rows), p.value))
            .collect();

        if plot.error_bars {
            chart.draw_series(s.points.iter().map(|p| {
                ErrorBar::new_vertical(
                    rows_f64(p.rows),
                    p.value - p.error,
                    p.value,
                    p.value + p.error,
                    color.stroke_width(stroke),
                    cap,
                )
            }))?;
        }

        chart
            .draw_series(LineSeries::new(data.clone(), color.stroke_width(stroke)))?
            .label(s.name.as_str())
            .legend(move |(x, y)| {
                PathElement::new(vec![(x, y), (x + legend_len, y)], color.stroke_width(stroke))
            });

        chart.draw_series(PointSeries::of_element(
            data,
            marker,
            color.filled(),
            &|coord, size, style| EmptyElement::at(coord) + Circle::new((0, 0), size, style.filled()),
        ))?;
    }

    chart
        .configure_series_labels()
        .position(SeriesLabelPosition::UpperRight)
        .legend_area_size(legend_area)
        .background_style(WHITE.mix(0.8))
        .border_style(BLACK)
        .label_font(font(config, config.tick_label_pt))
        .draw()?;

    root.present()?;
    Ok(())
}

/// Length of a legend line sample and the legend space reserved for it.
fn legend_swatch(config: &ChartConfig) -> (i32, i32) {
    let len = px_i32(config.px(20.0));
    (len, len + px_i32(config.px(5.0)))
}

// ---------------------------------------------------------------------------
// Comparison chart
// ---------------------------------------------------------------------------

fn draw_comparison(path: &Path, config: &ChartConfig, cmp: &Comparison) -> Result<()> {
    let (plot_width, height) = config.pixels(config.comparison_size);
    let legend_width = side_legend_width(config, &cmp.libraries);

    // The legend sits outside the plot, so the canvas grows to the right.
    let root = BitMapBackend::new(path, (plot_width + legend_width, height)).into_drawing_area();
    root.fill(&WHITE)?;
    let (plot_area, legend_area) = root.split_horizontally(plot_width);

    let categories = cmp.rows.len();
    let libraries = cmp.libraries.len();
    let mut chart = cartesian(
        &plot_area,
        config,
        "Performance Comparison Between Libraries",
        -0.5..count_f64(categories) - 0.5,
        bar_range(&cmp.scores),
    )?;

    let label_category = |x: &f64| category_label(&cmp.rows, *x);
    let y_desc = format!("Score ({})", cmp.unit);
    draw_mesh(
        &mut chart,
        config,
        &category_axes(&y_desc, &label_category, categories),
    )?;

    let width = CLUSTER_WIDTH / count_f64(libraries);
    for (lib_idx, scores) in cmp.scores.iter().enumerate() {
        let color = BAR_COLORS[lib_idx % BAR_COLORS.len()];
        let offset = bar_offset(lib_idx, libraries);
        chart.draw_series(scores.iter().enumerate().map(|(row_idx, &score)| {
            let left = count_f64(row_idx) + offset - width / 2.0;
            Rectangle::new([(left, 0.0), (left + width, score)], color.filled())
        }))?;
    }

    draw_side_legend(&legend_area, config, &cmp.libraries)?;

    root.present()?;
    Ok(())
}

/// Value range of a bar chart. Always includes zero, so bars of either sign
/// are drawn from the baseline.
fn bar_range(scores: &[Vec<f64>]) -> Range<f64> {
    let (lo, hi) = scores
        .iter()
        .flatten()
        .fold((0.0_f64, 0.0_f64), |(lo, hi), &v| (lo.min(v), hi.max(v)));
    if hi <= lo {
        return 0.0..1.0;
    }
    let pad = (hi - lo) * 0.05;
    let lo = if lo < 0.0 { lo - pad } else { 0.0 };
    let hi = if hi > 0.0 { hi + pad } else { 0.0 };
    lo..hi
}

/// Center offset of bar `idx` out of `count` inside its cluster.
fn bar_offset(idx: usize, count: usize) -> f64 {
    let width = CLUSTER_WIDTH / count_f64(count);
    width * (count_f64(idx) - count_f64(count) / 2.0 + 0.5)
}

/// Tick label for category slot `x`; empty between slots.
fn category_label(rows: &[u64], x: f64) -> String {
    let slot = x.round();
    if slot < 0.0 || (x - slot).abs() > 0.01 {
        return String::new();
    }
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let slot = slot as usize;
    rows.get(slot).map(u64::to_string).unwrap_or_default()
}

fn side_legend_width(config: &ChartConfig, labels: &[String]) -> u32 {
    let font_px = f64::from(config.px(config.tick_label_pt));
    let longest = labels.iter().map(|l| l.chars().count()).max().unwrap_or(0);
    // Swatch, gaps and border plus a rough average glyph width.
    let width = font_px * 4.0 + count_f64(longest) * font_px * 0.6;
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let width = width.ceil() as u32;
    width
}

fn draw_side_legend(area: &Area<'_>, config: &ChartConfig, labels: &[String]) -> Result<()> {
    let text_px = px_i32(config.px(config.tick_label_pt));
    let gap = text_px / 2;
    let line = text_px + gap;
    let x = gap;
    let top = px_i32(config.px(config.title_pt * 2.0));
    let (width, _) = area.dim_in_pixel();
    let right = px_i32(width) - gap;
    let count = i32::try_from(labels.len()).unwrap_or(i32::MAX);

    area.draw(&Rectangle::new(
        [(0, top - gap), (right, top + count.saturating_mul(line))],
        BLACK.mix(0.3).stroke_width(config.px(0.5)),
    ))?;

    let style = font(config, config.tick_label_pt);
    for (idx, label) in labels.iter().enumerate() {
        let y = top + i32::try_from(idx).unwrap_or(i32::MAX).saturating_mul(line);
        let color = BAR_COLORS[idx % BAR_COLORS.len()];
        area.draw(&Rectangle::new(
            [(x, y), (x + text_px, y + text_px)],
            color.filled(),
        ))?;
        area.draw(&Text::new(label.as_str(), (x + text_px + gap, y), style.clone()))?;
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// Shared pieces
// ---------------------------------------------------------------------------

struct Axes<'f> {
    y_desc: &'f str,
    x_fmt: &'f dyn Fn(&f64) -> String,
    x_labels: usize,
    x_grid: bool,
    /// Draw x tick marks. Off for category axes, whose label positions
    /// between slots stay blank.
    x_ticks: bool,
}

/// X axis of a category chart: a label under every slot center, with no
/// grid lines or tick marks.
fn category_axes<'f>(
    y_desc: &'f str,
    x_fmt: &'f dyn Fn(&f64) -> String,
    categories: usize,
) -> Axes<'f> {
    Axes {
        y_desc,
        x_fmt,
        x_labels: categories * 2 + 1,
        x_grid: false,
        x_ticks: false,
    }
}

fn cartesian<'a, 'b>(
    area: &'a Area<'b>,
    config: &ChartConfig,
    title: &str,
    x: Range<f64>,
    y: Range<f64>,
) -> Result<Chart<'a, 'b>> {
    let chart = ChartBuilder::on(area)
        .caption(title, bold_font(config, config.title_pt))
        .margin(config.px(10.0))
        .x_label_area_size(config.px(40.0))
        .y_label_area_size(config.px(60.0))
        .build_cartesian_2d(x, y)?;
    Ok(chart)
}

fn draw_mesh(chart: &mut Chart<'_, '_>, config: &ChartConfig, axes: &Axes<'_>) -> Result<()> {
    let mut mesh = chart.configure_mesh();
    mesh.x_desc(ROWS_DESC)
        .y_desc(axes.y_desc)
        .x_labels(axes.x_labels)
        .x_label_formatter(axes.x_fmt)
        .y_label_formatter(&format_value)
        .label_style(font(config, config.tick_label_pt))
        .axis_desc_style(font(config, config.axis_label_pt))
        .axis_style(BLACK.stroke_width(config.px(0.8)))
        .bold_line_style(BLACK.mix(0.3).stroke_width(config.px(0.8)))
        .light_line_style(WHITE);
    if !axes.x_grid {
        mesh.disable_x_mesh();
    }
    if !axes.x_ticks {
        mesh.set_tick_mark_size(LabelAreaPosition::Bottom, 0);
    }
    mesh.draw()?;
    Ok(())
}

fn font(config: &ChartConfig, points: f64) -> FontDesc<'_> {
    (config.font_family.as_str(), f64::from(config.px(points))).into_font()
}

fn bold_font(config: &ChartConfig, points: f64) -> FontDesc<'_> {
    (
        config.font_family.as_str(),
        f64::from(config.px(points)),
        FontStyle::Bold,
    )
        .into_font()
}

fn x_range(series: &[Series]) -> Range<f64> {
    let (lo, hi) = series
        .iter()
        .flat_map(|s| &s.points)
        .map(|p| rows_f64(p.rows))
        .fold((f64::MAX, f64::MIN), |(lo, hi), x| (lo.min(x), hi.max(x)));
    padded(lo, hi)
}

fn y_range(series: &[Series], with_error: bool) -> Range<f64> {
    let (lo, hi) = series
        .iter()
        .flat_map(|s| &s.points)
        .map(|p| {
            let err = if with_error { p.error.abs() } else { 0.0 };
            (p.value - err, p.value + err)
        })
        .fold((f64::MAX, f64::MIN), |(lo, hi), (a, b)| (lo.min(a), hi.max(b)));
    padded(lo, hi)
}

/// Widen `lo..hi` by 5% on each side, or around the value for a single point.
fn padded(lo: f64, hi: f64) -> Range<f64> {
    let pad = if hi > lo {
        (hi - lo) * 0.05
    } else {
        (hi.abs() * 0.1).max(1.0)
    };
    (lo - pad)..(hi + pad)
}

fn format_rows(x: &f64) -> String {
    format!("{x:.0}")
}

fn format_value(v: &f64) -> String {
    let abs = v.abs();
    if abs >= 1e6 {
        format!("{:.1}M", v / 1e6)
    } else if abs >= 1e4 {
        format!("{:.0}k", v / 1e3)
    } else if abs >= 10.0 || abs < 1e-9 {
        format!("{v:.0}")
    } else {
        format!("{v:.2}")
    }
}

#[allow(clippy::cast_precision_loss)]
fn rows_f64(rows: u64) -> f64 {
    rows as f64
}

#[allow(clippy::cast_precision_loss)]
fn count_f64(count: usize) -> f64 {
    count as f64
}

fn px_i32(px: u32) -> i32 {
    i32::try_from(px).unwrap_or(i32::MAX)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::load::parse_records;
    use crate::series::Point;

    fn small_config() -> ChartConfig {
        ChartConfig {
            dpi: 40,
            ..ChartConfig::default()
        }
    }

    fn sample_records() -> Vec<BenchmarkRecord> {
        parse_records(
            r#"[
                { "benchmark": "x.A", "params": { "rows": "10" },
                  "primaryMetric": { "score": 100, "scoreError": 1, "scoreUnit": "ops/s" },
                  "secondaryMetrics": { "gc.alloc.rate.norm": { "score": 2097152 } } },
                { "benchmark": "x.A", "params": { "rows": "20" },
                  "primaryMetric": { "score": 200, "scoreError": 2, "scoreUnit": "ops/s" },
                  "secondaryMetrics": { "gc.alloc.rate.norm": { "score": 4194304 } } },
                { "benchmark": "x.B", "params": { "rows": "10" },
                  "primaryMetric": { "score": 150, "scoreError": 3, "scoreUnit": "ops/s" } }
            ]"#,
        )
        .unwrap()
    }

    #[test]
    fn options_map_to_kinds() {
        assert_eq!(ChartKind::from_option(1), Some(ChartKind::Throughput));
        assert_eq!(ChartKind::from_option(2), Some(ChartKind::Comparison));
        assert_eq!(ChartKind::from_option(3), Some(ChartKind::Memory));
        assert_eq!(ChartKind::from_option(0), None);
        assert_eq!(ChartKind::from_option(4), None);
        for kind in ChartKind::ALL {
            assert_eq!(ChartKind::from_option(i64::from(kind.option())), Some(kind));
            assert_eq!(kind.file_name(), format!("{}.png", kind.name()));
        }
    }

    #[test]
    fn empty_records_skip_without_writing() {
        let dir = tempfile::tempdir().unwrap();
        let config = small_config();
        let expected = [
            SkipReason::NoThroughputData,
            SkipReason::NoComparisonData,
            SkipReason::NoMemoryData,
        ];
        for (kind, reason) in ChartKind::ALL.into_iter().zip(expected) {
            let outcome = kind.render(&[], dir.path(), &config).unwrap();
            assert_eq!(outcome, ChartOutcome::Skipped(reason));
            assert!(!dir.path().join(kind.file_name()).exists());
        }
    }

    #[test]
    fn memory_without_profiler_skips() {
        let dir = tempfile::tempdir().unwrap();
        let records = parse_records(r#"[{ "benchmark": "x.A", "primaryMetric": { "score": 1 } }]"#)
            .unwrap();
        let outcome = memory_chart(&records, dir.path(), &small_config()).unwrap();
        assert_eq!(outcome, ChartOutcome::Skipped(SkipReason::NoMemoryData));
        assert_eq!(
            SkipReason::NoMemoryData.to_string(),
            "No memory data found (requires GC profiler)"
        );
    }

    #[test]
    fn bars_are_centered_in_cluster() {
        assert!(bar_offset(0, 1).abs() < 1e-12);
        assert!((bar_offset(0, 2) + 0.2).abs() < 1e-12);
        assert!((bar_offset(1, 2) - 0.2).abs() < 1e-12);
        let sum: f64 = (0..4).map(|i| bar_offset(i, 4)).sum();
        assert!(sum.abs() < 1e-12);
    }

    #[test]
    fn category_labels_only_on_slots() {
        let rows = [10_u64, 20];
        assert_eq!(category_label(&rows, 0.0), "10");
        assert_eq!(category_label(&rows, 1.0), "20");
        assert_eq!(category_label(&rows, 0.5), "");
        assert_eq!(category_label(&rows, -0.5), "");
        assert_eq!(category_label(&rows, 2.0), "");
    }

    #[test]
    fn ranges_cover_points_and_errors() {
        let series = vec![Series {
            name: "A".into(),
            points: vec![Point::new(10, 100.0, 5.0), Point::new(20, 200.0, 10.0)],
        }];
        let x = x_range(&series);
        assert!(x.start < 10.0 && x.end > 20.0);
        let y = y_range(&series, true);
        assert!(y.start < 95.0 && y.end > 210.0);
        let y = y_range(&series, false);
        assert!(y.start < 100.0 && y.end > 200.0 && y.end < 210.0);
    }

    #[test]
    fn category_axis_has_no_ticks() {
        let rows = [10_u64, 20, 30];
        let fmt = |x: &f64| category_label(&rows, *x);
        let axes = category_axes("Score", &fmt, rows.len());
        assert!(!axes.x_ticks);
        assert!(!axes.x_grid);
        assert_eq!(axes.x_labels, 7);
        assert_eq!((axes.x_fmt)(&2.0), "30");
        assert_eq!((axes.x_fmt)(&1.5), "");
    }

    #[test]
    fn bar_range_starts_at_zero() {
        let r = bar_range(&[vec![5.0, 0.0], vec![7.0, 10.0]]);
        assert!(r.start.abs() < 1e-12);
        assert!((r.end - 10.5).abs() < 1e-9);
    }

    #[test]
    fn bar_range_covers_negative_scores() {
        let r = bar_range(&[vec![-4.0, 6.0]]);
        assert!(r.start < -4.0);
        assert!(r.end > 6.0);

        let r = bar_range(&[vec![-2.0]]);
        assert!(r.start < -2.0);
        assert!(r.end.abs() < 1e-12);
    }

    #[test]
    fn bar_range_all_zero() {
        assert_eq!(bar_range(&[vec![0.0, 0.0]]), 0.0..1.0);
        assert_eq!(bar_range(&[]), 0.0..1.0);
    }

    #[test]
    fn legend_leaves_small_gap_after_swatch() {
        let config = ChartConfig::default();
        let (len, area) = legend_swatch(&config);
        assert_eq!(len, px_i32(config.px(20.0)));
        assert_eq!(area - len, px_i32(config.px(5.0)));
    }

    #[test]
    fn single_point_range_is_not_empty() {
        let r = padded(0.0, 0.0);
        assert!(r.start < r.end);
    }

    #[test]
    fn value_labels() {
        assert_eq!(format_value(&0.0), "0");
        assert_eq!(format_value(&2.5), "2.50");
        assert_eq!(format_value(&250.0), "250");
        assert_eq!(format_value(&25_000.0), "25k");
        assert_eq!(format_value(&2_500_000.0), "2.5M");
    }

    // Rendering needs a system font for text layout.
    #[test]
    #[ignore]
    fn renders_every_chart() {
        let dir = tempfile::tempdir().unwrap();
        let config = small_config();
        let records = sample_records();
        for kind in ChartKind::ALL {
            let outcome = kind.render(&records, dir.path(), &config).unwrap();
            let path = dir.path().join(kind.file_name());
            assert_eq!(outcome, ChartOutcome::Written(path.clone()));
            let bytes = std::fs::read(&path).unwrap();
            assert_eq!(&bytes[..8], b"\x89PNG\r\n\x1a\n");
        }
    }

    #[test]
    #[ignore]
    fn comparison_canvas_includes_legend() {
        let dir = tempfile::tempdir().unwrap();
        let config = small_config();
        comparison_chart(&sample_records(), dir.path(), &config).unwrap();
        let bytes = std::fs::read(dir.path().join("comparison.png")).unwrap();
        // IHDR width, big-endian, right after the signature and chunk header.
        let width = u32::from_be_bytes([bytes[16], bytes[17], bytes[18], bytes[19]]);
        assert!(width > config.pixels(config.comparison_size).0);
    }
}
