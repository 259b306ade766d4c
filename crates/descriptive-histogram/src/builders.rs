//! Equal-width histogram construction

use crate::traits::HistogramBuilder;
use crate::types::{Histogram, HistogramBin};
use descriptive_core::{ensure_finite, sorted_copy, Error, Result};

/// What to do when every observation has the same value
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DegenerateRange {
    /// Widen the range to `[v - 0.5, v + 0.5]` and keep the requested
    /// number of bins
    #[default]
    Widen,
    /// Fail with [`Error::DegenerateRange`]
    Reject,
}

/// Fixed-width histogram builder
///
/// Splits `[min, max]` into `num_bins` equal-width bins. Every bin is
/// closed on the left and open on the right, except the last one which also
/// contains `max`. Edge `i` is `min + i * width` and the final edge is
/// exactly `max`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedWidthBuilder {
    num_bins: usize,
    degenerate: DegenerateRange,
}

impl FixedWidthBuilder {
    /// Create a new fixed-width histogram builder
    pub fn new(num_bins: usize) -> Self {
        Self {
            num_bins,
            degenerate: DegenerateRange::default(),
        }
    }

    /// Choose how a zero-width range is handled
    pub fn on_degenerate(mut self, policy: DegenerateRange) -> Self {
        self.degenerate = policy;
        self
    }

    pub fn num_bins(&self) -> usize {
        self.num_bins
    }

    fn edges(&self, lo: f64, hi: f64) -> Vec<f64> {
        let n = self.num_bins as f64;
        let width = (hi - lo) / n;
        let mut edges: Vec<f64> = if width.is_finite() {
            (0..self.num_bins).map(|i| lo + i as f64 * width).collect()
        } else {
            // hi - lo overflows; interpolate without forming the span
            (0..self.num_bins)
                .map(|i| {
                    let t = i as f64 / n;
                    lo * (1.0 - t) + hi * t
                })
                .collect()
        };
        edges.push(hi);
        edges
    }
}

impl HistogramBuilder for FixedWidthBuilder {
    fn build(&self, sample: &[f64]) -> Result<Histogram> {
        let sorted = sorted_copy(sample)?;
        self.build_sorted(&sorted)
    }

    fn build_sorted(&self, sorted_sample: &[f64]) -> Result<Histogram> {
        if self.num_bins == 0 {
            return Err(Error::InvalidParameter(
                "bucket count must be at least 1".to_string(),
            ));
        }
        if sorted_sample.is_empty() {
            return Err(Error::empty_input("histogram"));
        }
        ensure_finite(sorted_sample, "histogram input")?;

        // O(1) min/max from sorted data
        let min = sorted_sample[0];
        let max = sorted_sample[sorted_sample.len() - 1];

        let (lo, hi) = if min == max {
            match self.degenerate {
                DegenerateRange::Widen => (min - 0.5, max + 0.5),
                DegenerateRange::Reject => return Err(Error::DegenerateRange { value: min }),
            }
        } else {
            (min, max)
        };

        let total = sorted_sample.len();
        let edges = self.edges(lo, hi);
        let mut bins: Vec<HistogramBin> = edges
            .windows(2)
            .map(|w| HistogramBin::new(w[0], w[1], 0, total))
            .collect();

        // Single pass through sorted data
        let last = self.num_bins - 1;
        let mut current_bin = 0;
        for &value in sorted_sample {
            while current_bin < last && value >= bins[current_bin].right {
                current_bin += 1;
            }
            bins[current_bin].count += 1;
        }

        for bin in &mut bins {
            bin.update_density(total);
        }

        tracing::debug!(
            bins = self.num_bins,
            n = total,
            lo,
            hi,
            "built fixed-width histogram"
        );
        Ok(Histogram::new(bins, total, min, max))
    }

    fn target_bins(&self) -> Option<usize> {
        Some(self.num_bins)
    }
}
