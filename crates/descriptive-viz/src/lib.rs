//! Histogram chart rendering
//!
//! Rendering is split into a description ([`HistogramChart`]) and a
//! capability ([`ChartRenderer`]). [`render_histogram`] builds the
//! histogram and passes the chart to whichever renderer the caller
//! supplies, so statistics code stays testable without a graphics backend.
//!
//! # Example
//!
//! ```rust
//! use descriptive_viz::{render_histogram, NullChartRenderer};
//!
//! let heights = [1.85, 1.80, 1.73, 1.70, 1.65, 1.54, 1.40];
//! let mut renderer = NullChartRenderer;
//! render_histogram(&mut renderer, &heights, 5, "Heights", "Height", "Frequency").unwrap();
//! ```

pub mod chart;
pub mod renderer;
#[cfg(feature = "svg")]
pub mod svg;

pub use chart::{ChartStyle, HistogramChart, Rgb};
pub use renderer::{ChartRenderer, NullChartRenderer};
#[cfg(any(test, feature = "test-utils"))]
pub use renderer::RecordingChartRenderer;
#[cfg(feature = "svg")]
pub use svg::SvgChartRenderer;

pub use descriptive_core::{Error, Result};

use descriptive_histogram::fixed_histogram;

/// Draw a bar histogram of `data` with `bucket_count` buckets
///
/// Uses the default [`ChartStyle`]; build a [`HistogramChart`] and call
/// [`render_chart`] for anything else.
pub fn render_histogram<R: ChartRenderer + ?Sized>(
    renderer: &mut R,
    data: &[f64],
    bucket_count: usize,
    title: &str,
    x_label: &str,
    y_label: &str,
) -> Result<()> {
    let histogram = fixed_histogram(data, bucket_count)?;
    let chart = HistogramChart::new(histogram, title).with_labels(x_label, y_label);
    render_chart(renderer, &chart)
}

/// Hand a prepared chart to `renderer`, skipping renderers that are disabled
pub fn render_chart<R: ChartRenderer + ?Sized>(
    renderer: &mut R,
    chart: &HistogramChart,
) -> Result<()> {
    if !renderer.is_enabled() {
        tracing::trace!(title = %chart.title, "renderer disabled, skipping chart");
        return Ok(());
    }
    renderer.render(chart)
}
