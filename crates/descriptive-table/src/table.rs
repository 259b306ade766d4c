//! Labeled, row-appendable numeric tables

use crate::summary::{summarize, Summary};
use descriptive_core::{mean, Error, Result};
use std::collections::HashSet;
use std::fmt;
use tracing::instrument;

/// Numeric data with named columns and an integer row index
///
/// The set of columns is fixed at creation. Rows are only ever appended;
/// each new row takes the label after the last one, starting from the
/// table's index start (0 unless changed with [`Table::with_index_start`]).
#[derive(Debug, Clone, PartialEq)]
pub struct Table {
    columns: Vec<String>,
    index_start: i64,
    index: Vec<i64>,
    /// Column-major storage, one vector per column
    data: Vec<Vec<f64>>,
}

impl Table {
    /// Create an empty table with the given columns
    pub fn new<I, S>(columns: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let columns: Vec<String> = columns.into_iter().map(Into::into).collect();
        if columns.is_empty() {
            return Err(Error::InvalidInput(
                "a table needs at least one column".to_string(),
            ));
        }

        let mut seen = HashSet::new();
        for name in &columns {
            if !seen.insert(name.as_str()) {
                return Err(Error::InvalidInput(format!("duplicate column '{name}'")));
            }
        }

        let data = vec![Vec::new(); columns.len()];
        Ok(Self {
            columns,
            index_start: 0,
            index: Vec::new(),
            data,
        })
    }

    /// Create a table and append every row in order
    pub fn from_rows<I, S, R>(columns: I, rows: &[R]) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
        R: AsRef<[f64]>,
    {
        let mut table = Self::new(columns)?;
        for row in rows {
            table.append_row(row.as_ref())?;
        }
        Ok(table)
    }

    /// Start the row index at `start`, relabeling any existing rows
    pub fn with_index_start(mut self, start: i64) -> Self {
        self.index_start = start;
        self.index = (start..).take(self.index.len()).collect();
        self
    }

    /// Append one row, returning the label it was given
    ///
    /// The row must supply exactly one value per column; on mismatch the
    /// table is left untouched.
    #[instrument(level = "debug", skip(self), fields(columns = self.columns.len()))]
    pub fn append_row(&mut self, values: &[f64]) -> Result<i64> {
        if values.len() != self.columns.len() {
            return Err(Error::ColumnCountMismatch {
                expected: self.columns.len(),
                actual: values.len(),
            });
        }

        let label = self.next_label();
        for (column, &value) in self.data.iter_mut().zip(values) {
            column.push(value);
        }
        self.index.push(label);

        tracing::debug!(label, rows = self.index.len(), "appended row");
        Ok(label)
    }

    /// By-value form of [`Table::append_row`]
    pub fn with_row(mut self, values: &[f64]) -> Result<Self> {
        self.append_row(values)?;
        Ok(self)
    }

    /// Label the next appended row will receive
    pub fn next_label(&self) -> i64 {
        self.index.last().map_or(self.index_start, |last| last + 1)
    }

    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    pub fn column_count(&self) -> usize {
        self.columns.len()
    }

    /// Number of rows
    pub fn len(&self) -> usize {
        self.index.len()
    }

    pub fn is_empty(&self) -> bool {
        self.index.is_empty()
    }

    /// Row labels in insertion order
    pub fn index(&self) -> &[i64] {
        &self.index
    }

    /// Values of a column by name
    pub fn column(&self, name: &str) -> Result<&[f64]> {
        self.columns
            .iter()
            .position(|c| c == name)
            .map(|i| self.data[i].as_slice())
            .ok_or_else(|| Error::UnknownColumn(name.to_string()))
    }

    /// Mean of a single column
    pub fn column_mean(&self, name: &str) -> Result<f64> {
        mean(self.column(name)?)
    }

    /// The row with the given label
    pub fn row(&self, label: i64) -> Option<Vec<f64>> {
        let position = self.index.iter().position(|&l| l == label)?;
        Some(self.data.iter().map(|column| column[position]).collect())
    }

    /// Iterate over `(label, row values)` pairs
    pub fn rows(&self) -> impl Iterator<Item = (i64, Vec<f64>)> + '_ {
        self.index
            .iter()
            .enumerate()
            .map(|(position, &label)| (label, self.data.iter().map(|c| c[position]).collect()))
    }

    /// Per-column count/mean/std/min/quartiles/max
    pub fn summarize(&self) -> Result<Summary> {
        summarize(self)
    }
}

impl fmt::Display for Table {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let labels: Vec<String> = self.index.iter().map(i64::to_string).collect();
        let label_width = labels.iter().map(String::len).max().unwrap_or(0);

        let cells: Vec<Vec<String>> = self
            .data
            .iter()
            .map(|column| column.iter().map(|v| format!("{v:.2}")).collect())
            .collect();
        let widths: Vec<usize> = self
            .columns
            .iter()
            .zip(&cells)
            .map(|(name, column)| {
                column
                    .iter()
                    .map(String::len)
                    .chain(std::iter::once(name.len()))
                    .max()
                    .unwrap_or(0)
            })
            .collect();

        write!(f, "{:label_width$}", "")?;
        for (name, &width) in self.columns.iter().zip(&widths) {
            write!(f, "  {name:>width$}")?;
        }

        for (row, label) in labels.iter().enumerate() {
            write!(f, "\n{label:<label_width$}")?;
            for (column, &width) in cells.iter().zip(&widths) {
                write!(f, "  {:>width$}", column[row])?;
            }
        }
        Ok(())
    }
}
