//! Rendering parameters.
//!
//! Sizes are given the way a plotting library takes them: figures in inches
//! and fonts in points, both converted to pixels at the configured DPI.

/// Figure size in inches.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FigureSize {
    /// Width in inches.
    pub width: f64,
    /// Height in inches.
    pub height: f64,
}

impl FigureSize {
    /// Create a figure size.
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }
}

/// Parameters shared by all charts.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartConfig {
    /// Output resolution.
    pub dpi: u32,
    /// Font family for all text.
    pub font_family: String,
    /// Size of the throughput chart.
    pub throughput_size: FigureSize,
    /// Size of the comparison chart, excluding the legend column.
    pub comparison_size: FigureSize,
    /// Size of the memory chart.
    pub memory_size: FigureSize,
    /// Title font size in points.
    pub title_pt: f64,
    /// Axis description font size in points.
    pub axis_label_pt: f64,
    /// Tick label and legend font size in points.
    pub tick_label_pt: f64,
    /// Line width in points.
    pub line_pt: f64,
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self {
            dpi: 300,
            font_family: "sans-serif".into(),
            throughput_size: FigureSize::new(12.0, 6.0),
            comparison_size: FigureSize::new(14.0, 7.0),
            memory_size: FigureSize::new(12.0, 6.0),
            title_pt: 14.0,
            axis_label_pt: 12.0,
            tick_label_pt: 10.0,
            line_pt: 1.5,
        }
    }
}

impl ChartConfig {
    /// Convert a length in points to pixels. Never returns 0.
    pub fn px(&self, points: f64) -> u32 {
        let px = (points * f64::from(self.dpi) / 72.0).round();
        // Saturating float-to-int cast; sizes are far below u32::MAX.
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let px = px as u32;
        px.max(1)
    }

    /// Pixel dimensions of a figure.
    pub fn pixels(&self, size: FigureSize) -> (u32, u32) {
        (self.px(size.width * 72.0), self.px(size.height * 72.0))
    }
}
