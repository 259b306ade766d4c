//! Rectangular samples of numeric observations

use crate::central::{self, Mode};
use crate::error::{Error, Result};
use crate::{quantile, spread};
use std::fmt;

/// An ordered, rectangular collection of observations
///
/// Rows have equal length. Values are stored row-major so the flattened
/// view used by aggregate statistics is a plain slice.
#[derive(Debug, Clone, PartialEq)]
pub struct Sample {
    values: Vec<f64>,
    n_cols: usize,
}

impl Sample {
    /// Build a sample from rows of equal length
    pub fn from_rows<R: AsRef<[f64]>>(rows: &[R]) -> Result<Self> {
        let n_cols = rows.first().map_or(0, |row| row.as_ref().len());
        let mut values = Vec::with_capacity(rows.len() * n_cols);

        for (i, row) in rows.iter().enumerate() {
            let row = row.as_ref();
            if row.len() != n_cols {
                return Err(Error::InvalidInput(format!(
                    "row {i} has {} values, expected {n_cols}",
                    row.len()
                )));
            }
            values.extend_from_slice(row);
        }

        tracing::debug!(rows = rows.len(), cols = n_cols, "built sample");
        Ok(Self { values, n_cols })
    }

    /// Build a one-row sample from a 1-D sequence
    pub fn from_values(values: Vec<f64>) -> Self {
        let n_cols = values.len();
        Self { values, n_cols }
    }

    /// Flattened observations in row-major order
    pub fn values(&self) -> &[f64] {
        &self.values
    }

    /// Total number of observations
    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn n_rows(&self) -> usize {
        if self.n_cols == 0 {
            0
        } else {
            self.values.len() / self.n_cols
        }
    }

    pub fn n_cols(&self) -> usize {
        self.n_cols
    }

    /// Iterate over rows
    pub fn rows(&self) -> impl Iterator<Item = &[f64]> {
        // chunks() panics on a zero chunk size
        self.values.chunks(self.n_cols.max(1))
    }

    /// A single row, if in range
    pub fn row(&self, index: usize) -> Option<&[f64]> {
        self.rows().nth(index)
    }

    /// A copy of the values in one column, if in range
    pub fn column(&self, index: usize) -> Option<Vec<f64>> {
        if index >= self.n_cols {
            return None;
        }
        Some(self.rows().map(|row| row[index]).collect())
    }

    pub fn mean(&self) -> Result<f64> {
        central::mean(&self.values)
    }

    pub fn median(&self) -> Result<f64> {
        central::median(&self.values)
    }

    /// Mode over the flattened observations
    pub fn mode(&self) -> Result<Mode> {
        central::mode(&self.values)
    }

    pub fn quantile(&self, p: f64) -> Result<f64> {
        quantile::quantile(&self.values, p)
    }

    /// Population variance (N denominator)
    pub fn variance(&self) -> Result<f64> {
        spread::variance(&self.values)
    }

    /// Population standard deviation (N denominator)
    pub fn stddev(&self) -> Result<f64> {
        spread::stddev(&self.values)
    }
}

impl From<Vec<f64>> for Sample {
    fn from(values: Vec<f64>) -> Self {
        Self::from_values(values)
    }
}

impl fmt::Display for Sample {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let format_row = |row: &[f64]| {
            row.iter()
                .map(|x| format!("{x:>6.2}"))
                .collect::<Vec<_>>()
                .join(" ")
        };

        write!(f, "[")?;
        for (i, row) in self.rows().enumerate() {
            if i > 0 {
                write!(f, "\n ")?;
            }
            write!(f, "[{}]", format_row(row))?;
        }
        write!(f, "]")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_rows_shape() {
        let sample = Sample::from_rows(&[[1.0, 2.0, 3.0], [4.0, 5.0, 6.0]]).unwrap();
        assert_eq!(sample.n_rows(), 2);
        assert_eq!(sample.n_cols(), 3);
        assert_eq!(sample.len(), 6);
        assert_eq!(sample.values(), &[1.0, 2.0, 3.0, 4.0, 5.0, 6.0]);
        assert_eq!(sample.row(1), Some(&[4.0, 5.0, 6.0][..]));
        assert_eq!(sample.column(2), Some(vec![3.0, 6.0]));
        assert_eq!(sample.column(3), None);
    }

    #[test]
    fn test_ragged_rows_rejected() {
        let rows: Vec<Vec<f64>> = vec![vec![1.0, 2.0], vec![3.0]];
        assert!(matches!(
            Sample::from_rows(&rows),
            Err(Error::InvalidInput(_))
        ));
    }

    #[test]
    fn test_empty_sample() {
        let rows: Vec<Vec<f64>> = vec![];
        let sample = Sample::from_rows(&rows).unwrap();
        assert!(sample.is_empty());
        assert_eq!(sample.n_rows(), 0);
        assert_eq!(sample.rows().count(), 0);
        assert!(matches!(sample.mean(), Err(Error::EmptyInput { .. })));
    }

    #[test]
    fn test_one_dimensional() {
        let sample = Sample::from(vec![1.0, 2.0, 2.0]);
        assert_eq!(sample.n_rows(), 1);
        assert_eq!(sample.mode().unwrap().value, 2.0);
    }

    #[test]
    fn test_display() {
        let sample = Sample::from_rows(&[[1.85, 1.8], [1.4, 1.42]]).unwrap();
        assert_eq!(sample.to_string(), "[[  1.85   1.80]\n [  1.40   1.42]]");
    }
}
