//! Per-column "describe" summaries
//!
//! Unlike the raw [`descriptive_core::stddev`], the `std` reported here is
//! the sample standard deviation (N - 1 denominator), matching what a
//! dataframe `describe` prints.

use crate::table::Table;
use descriptive_core::{mean, quantile_sorted, sample_stddev, sorted_copy, Error, Result};
use std::fmt;

/// Summary statistics for a single column
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SummaryStats {
    pub count: usize,
    pub mean: f64,
    /// Sample standard deviation (N - 1); NaN for a single observation
    pub std: f64,
    pub min: f64,
    /// 25th percentile
    pub q25: f64,
    /// 50th percentile
    pub q50: f64,
    /// 75th percentile
    pub q75: f64,
    pub max: f64,
}

impl SummaryStats {
    /// Summarize one column of observations
    pub fn compute(values: &[f64]) -> Result<Self> {
        if values.is_empty() {
            return Err(Error::empty_input("summarize"));
        }
        let sorted = sorted_copy(values)?;

        Ok(Self {
            count: values.len(),
            mean: mean(values)?,
            std: sample_stddev(values)?,
            min: sorted[0],
            q25: quantile_sorted(&sorted, 0.25)?,
            q50: quantile_sorted(&sorted, 0.5)?,
            q75: quantile_sorted(&sorted, 0.75)?,
            max: sorted[sorted.len() - 1],
        })
    }

    /// Interquartile range (q75 - q25)
    pub fn iqr(&self) -> f64 {
        self.q75 - self.q25
    }

    /// Row labels used when printing a [`Summary`]
    pub const LABELS: [&'static str; 8] = [
        "count", "mean", "std", "min", "25%", "50%", "75%", "max",
    ];

    /// Values in [`Self::LABELS`] order
    fn values(&self) -> [f64; 8] {
        [
            self.count as f64,
            self.mean,
            self.std,
            self.min,
            self.q25,
            self.q50,
            self.q75,
            self.max,
        ]
    }
}

/// Summary of every column of a table, in column order
#[derive(Debug, Clone, PartialEq)]
pub struct Summary {
    columns: Vec<(String, SummaryStats)>,
}

impl Summary {
    /// Look up the statistics for a column by name
    pub fn get(&self, column: &str) -> Option<&SummaryStats> {
        self.columns
            .iter()
            .find(|(name, _)| name == column)
            .map(|(_, stats)| stats)
    }

    /// Iterate over `(column name, statistics)` pairs
    pub fn iter(&self) -> impl Iterator<Item = (&str, &SummaryStats)> {
        self.columns.iter().map(|(name, stats)| (name.as_str(), stats))
    }

    pub fn len(&self) -> usize {
        self.columns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }
}

/// Compute count/mean/std/min/quartiles/max for every column
pub fn summarize(table: &Table) -> Result<Summary> {
    if table.is_empty() {
        return Err(Error::empty_input("summarize"));
    }

    let columns = table
        .columns()
        .iter()
        .map(|name| {
            let stats = SummaryStats::compute(table.column(name)?)?;
            Ok((name.clone(), stats))
        })
        .collect::<Result<Vec<_>>>()?;

    tracing::debug!(columns = columns.len(), rows = table.len(), "summarized table");
    Ok(Summary { columns })
}

impl fmt::Display for Summary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let cells: Vec<Vec<String>> = self
            .columns
            .iter()
            .map(|(_, stats)| {
                stats
                    .values()
                    .iter()
                    .map(|value| format!("{value:.6}"))
                    .collect()
            })
            .collect();

        let widths: Vec<usize> = self
            .columns
            .iter()
            .zip(&cells)
            .map(|((name, _), column)| {
                column
                    .iter()
                    .map(String::len)
                    .chain(std::iter::once(name.len()))
                    .max()
                    .unwrap_or(0)
            })
            .collect();

        let label_width = 5;
        write!(f, "{:label_width$}", "")?;
        for ((name, _), &width) in self.columns.iter().zip(&widths) {
            write!(f, "  {name:>width$}")?;
        }

        for (row, label) in SummaryStats::LABELS.iter().enumerate() {
            write!(f, "\n{label:<label_width$}")?;
            for (column, &width) in cells.iter().zip(&widths) {
                write!(f, "  {:>width$}", column[row])?;
            }
        }
        Ok(())
    }
}
