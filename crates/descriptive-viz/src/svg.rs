//! SVG histogram rendering with plotters

use crate::chart::HistogramChart;
use crate::renderer::ChartRenderer;
use descriptive_core::{Error, Result};
use plotters::prelude::*;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::instrument;

fn render_error<E: std::fmt::Display>(err: E) -> Error {
    Error::Render(err.to_string())
}

/// Writes each chart to `<output_dir>/<title-slug>.svg`
///
/// Titles that map to the same slug get a numeric suffix so earlier charts
/// are never overwritten within one renderer's lifetime.
#[derive(Debug, Clone)]
pub struct SvgChartRenderer {
    output_dir: PathBuf,
    written: Vec<PathBuf>,
}

impl SvgChartRenderer {
    pub fn new(output_dir: impl Into<PathBuf>) -> Self {
        Self {
            output_dir: output_dir.into(),
            written: Vec::new(),
        }
    }

    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }

    /// Files written so far, in render order
    pub fn written(&self) -> &[PathBuf] {
        &self.written
    }

    fn next_path(&self, chart: &HistogramChart) -> PathBuf {
        let slug = chart.slug();
        let mut path = self.output_dir.join(format!("{slug}.svg"));
        let mut n = 2;
        while self.written.contains(&path) {
            path = self.output_dir.join(format!("{slug}-{n}.svg"));
            n += 1;
        }
        path
    }
}

impl ChartRenderer for SvgChartRenderer {
    #[instrument(level = "debug", skip(self, chart), fields(title = %chart.title))]
    fn render(&mut self, chart: &HistogramChart) -> Result<()> {
        fs::create_dir_all(&self.output_dir)?;
        let path = self.next_path(chart);
        draw_histogram(&path, chart)?;

        tracing::info!(path = %path.display(), "wrote histogram chart");
        self.written.push(path);
        Ok(())
    }
}

fn draw_histogram(path: &Path, chart: &HistogramChart) -> Result<()> {
    let style = &chart.style;
    let hist = &chart.histogram;
    let edges = hist.edges();
    let (x_lo, x_hi) = match (edges.first(), edges.last()) {
        (Some(&lo), Some(&hi)) if hi > lo => (lo, hi),
        _ => (hist.min() - 0.5, hist.max() + 0.5),
    };
    // Headroom above the tallest bar
    let y_hi = hist.max_count() as u32 + 1;

    let root = SVGBackend::new(path, (style.width, style.height)).into_drawing_area();
    root.fill(&WHITE).map_err(render_error)?;

    let mut ctx = ChartBuilder::on(&root)
        .caption(&chart.title, ("sans-serif", 24).into_font())
        .margin(16)
        .x_label_area_size(48)
        .y_label_area_size(56)
        .build_cartesian_2d(x_lo..x_hi, 0u32..y_hi)
        .map_err(render_error)?;

    ctx.configure_mesh()
        .disable_x_mesh()
        .x_desc(chart.x_label.as_str())
        .y_desc(chart.y_label.as_str())
        .draw()
        .map_err(render_error)?;

    let fill = RGBColor(style.fill.0, style.fill.1, style.fill.2);
    let bars = chart
        .bar_extents()
        .into_iter()
        .zip(hist.bins())
        .map(|((left, right), bin)| {
            Rectangle::new([(left, 0u32), (right, bin.count as u32)], fill.filled())
        });
    ctx.draw_series(bars).map_err(render_error)?;

    root.present().map_err(render_error)?;
    Ok(())
}
