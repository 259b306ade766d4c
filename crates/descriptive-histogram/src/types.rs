//! Core types for histogram representation

use std::fmt;

/// A single bucket in a histogram
#[derive(Debug, Clone, PartialEq)]
pub struct HistogramBin {
    /// Left edge of the bin (inclusive)
    pub left: f64,
    /// Right edge of the bin (exclusive, except for the last bin)
    pub right: f64,
    /// Number of values in this bin
    pub count: usize,
    /// Density (count / (total_count * bin_width))
    pub density: f64,
}

impl HistogramBin {
    /// Create a new histogram bin
    pub fn new(left: f64, right: f64, count: usize, total_count: usize) -> Self {
        let mut bin = Self {
            left,
            right,
            count,
            density: 0.0,
        };
        bin.update_density(total_count);
        bin
    }

    pub(crate) fn update_density(&mut self, total_count: usize) {
        let width = self.width();
        self.density = if width > 0.0 && total_count > 0 {
            self.count as f64 / (total_count as f64 * width)
        } else {
            0.0
        };
    }

    /// Get the center point of the bin
    pub fn center(&self) -> f64 {
        (self.left + self.right) / 2.0
    }

    /// Get the width of the bin
    pub fn width(&self) -> f64 {
        self.right - self.left
    }

    /// Check if a value falls within this bin, treating the right edge as open
    pub fn contains(&self, value: f64) -> bool {
        value >= self.left && value < self.right
    }

    /// Get the relative frequency (count / total_count)
    pub fn frequency(&self, total_count: usize) -> f64 {
        if total_count > 0 {
            self.count as f64 / total_count as f64
        } else {
            0.0
        }
    }
}

impl fmt::Display for HistogramBin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[{:.3}, {:.3}): count={}, density={:.3}",
            self.left, self.right, self.count, self.density
        )
    }
}

/// An equal-width histogram of a sequence
#[derive(Debug, Clone, PartialEq)]
pub struct Histogram {
    bins: Vec<HistogramBin>,
    total_count: usize,
    /// Minimum value in the data
    min: f64,
    /// Maximum value in the data
    max: f64,
}

impl Histogram {
    /// Create a new histogram
    pub fn new(bins: Vec<HistogramBin>, total_count: usize, min: f64, max: f64) -> Self {
        Self {
            bins,
            total_count,
            min,
            max,
        }
    }

    pub fn bins(&self) -> &[HistogramBin] {
        &self.bins
    }

    /// Get the number of bins
    pub fn len(&self) -> usize {
        self.bins.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bins.is_empty()
    }

    /// Get the total count of data points
    pub fn total_count(&self) -> usize {
        self.total_count
    }

    /// Smallest observation
    pub fn min(&self) -> f64 {
        self.min
    }

    /// Largest observation
    pub fn max(&self) -> f64 {
        self.max
    }

    /// Get the maximum count in any bin
    pub fn max_count(&self) -> usize {
        self.bins.iter().map(|bin| bin.count).max().unwrap_or(0)
    }

    /// Find which bin contains a given value
    pub fn find_bin(&self, value: f64) -> Option<usize> {
        // The last bin includes its right boundary
        if let Some(last) = self.bins.last() {
            if value == last.right {
                return Some(self.bins.len() - 1);
            }
        }

        self.bins.iter().position(|bin| bin.contains(value))
    }

    /// Get counts as a vector
    pub fn counts(&self) -> Vec<usize> {
        self.bins.iter().map(|bin| bin.count).collect()
    }

    /// Get densities as a vector
    pub fn densities(&self) -> Vec<f64> {
        self.bins.iter().map(|bin| bin.density).collect()
    }

    /// Get frequencies as a vector
    pub fn frequencies(&self) -> Vec<f64> {
        self.bins
            .iter()
            .map(|bin| bin.frequency(self.total_count))
            .collect()
    }

    /// Get bin centers as a vector
    pub fn centers(&self) -> Vec<f64> {
        self.bins.iter().map(|bin| bin.center()).collect()
    }

    /// Get bin edges (including rightmost edge)
    pub fn edges(&self) -> Vec<f64> {
        let Some(last) = self.bins.last() else {
            return vec![];
        };

        let mut edges = Vec::with_capacity(self.bins.len() + 1);
        edges.extend(self.bins.iter().map(|bin| bin.left));
        edges.push(last.right);
        edges
    }
}

impl fmt::Display for Histogram {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Histogram({} bins, n={}, range=[{:.3}, {:.3}])",
            self.len(),
            self.total_count,
            self.min,
            self.max
        )
    }
}
