//! The rendering capability and its non-graphical implementations
//!
//! Statistics code hands finished [`HistogramChart`]s to a [`ChartRenderer`]
//! and never talks to a graphics backend directly. Tests substitute
//! [`NullChartRenderer`] or [`RecordingChartRenderer`].

use crate::chart::HistogramChart;
use descriptive_core::Result;

/// Something that can turn a chart description into a visual artifact
///
/// `render` is synchronous: it returns once the artifact is complete.
pub trait ChartRenderer {
    /// Draw a single histogram chart
    fn render(&mut self, chart: &HistogramChart) -> Result<()>;

    /// Check if this renderer actually produces output
    fn is_enabled(&self) -> bool {
        true
    }
}

impl<R: ChartRenderer + ?Sized> ChartRenderer for &mut R {
    fn render(&mut self, chart: &HistogramChart) -> Result<()> {
        (**self).render(chart)
    }

    fn is_enabled(&self) -> bool {
        (**self).is_enabled()
    }
}

impl<R: ChartRenderer + ?Sized> ChartRenderer for Box<R> {
    fn render(&mut self, chart: &HistogramChart) -> Result<()> {
        (**self).render(chart)
    }

    fn is_enabled(&self) -> bool {
        (**self).is_enabled()
    }
}

/// Null renderer that does nothing (for when charts are disabled)
#[derive(Debug, Default, Clone, Copy)]
pub struct NullChartRenderer;

impl ChartRenderer for NullChartRenderer {
    fn render(&mut self, _chart: &HistogramChart) -> Result<()> {
        Ok(())
    }

    fn is_enabled(&self) -> bool {
        false
    }
}

/// Keeps every chart it is asked to render, for later inspection
#[cfg(any(test, feature = "test-utils"))]
#[derive(Debug, Default, Clone)]
pub struct RecordingChartRenderer {
    charts: Vec<HistogramChart>,
}

#[cfg(any(test, feature = "test-utils"))]
impl RecordingChartRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn charts(&self) -> &[HistogramChart] {
        &self.charts
    }
}

#[cfg(any(test, feature = "test-utils"))]
impl ChartRenderer for RecordingChartRenderer {
    fn render(&mut self, chart: &HistogramChart) -> Result<()> {
        self.charts.push(chart.clone());
        Ok(())
    }
}
