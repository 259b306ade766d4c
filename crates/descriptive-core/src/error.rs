//! Error types for descriptive statistics
//!
//! Provides a unified error type for all descriptive-stats crates.

use thiserror::Error;

/// Core error type for descriptive statistical operations
#[derive(Error, Debug)]
pub enum Error {
    /// A statistic was requested over zero observations
    #[error("Empty input: {operation} requires at least one observation")]
    EmptyInput { operation: &'static str },

    /// An appended row does not supply one value per column
    #[error("Column count mismatch: expected {expected} values, got {actual}")]
    ColumnCountMismatch { expected: usize, actual: usize },

    /// Every value is identical, so a bucket width would be zero
    #[error("Degenerate range: all values equal {value}")]
    DegenerateRange { value: f64 },

    /// Invalid parameter provided to a function
    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),

    /// Invalid input data
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// NaN or infinite values where an ordering is required
    #[error("Non-finite input: {0} contains NaN or infinite values")]
    NonFinite(String),

    /// Column lookup by name failed
    #[error("Unknown column: {0}")]
    UnknownColumn(String),

    /// Chart backend failure
    #[error("Render error: {0}")]
    Render(String),

    /// IO error (for chart output)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias using our Error type
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Create an error for empty input
    pub fn empty_input(operation: &'static str) -> Self {
        Self::EmptyInput { operation }
    }

    /// Create an error for an out-of-range quantile
    pub fn invalid_quantile(p: f64) -> Self {
        Self::InvalidParameter(format!("Quantile {p} must be in [0, 1]"))
    }

    /// Create an error for NaN/Inf values
    pub fn non_finite(context: &str) -> Self {
        Self::NonFinite(context.to_string())
    }
}

/// Fail with [`Error::EmptyInput`] when `data` has no observations
pub(crate) fn ensure_non_empty(data: &[f64], operation: &'static str) -> Result<()> {
    if data.is_empty() {
        return Err(Error::empty_input(operation));
    }
    Ok(())
}

/// Fail with [`Error::NonFinite`] when `data` holds NaN or infinities
pub fn ensure_finite(data: &[f64], context: &str) -> Result<()> {
    if data.iter().any(|x| !x.is_finite()) {
        return Err(Error::non_finite(context));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Error::empty_input("mean");
        assert_eq!(
            err.to_string(),
            "Empty input: mean requires at least one observation"
        );

        let err = Error::ColumnCountMismatch { expected: 2, actual: 3 };
        assert_eq!(
            err.to_string(),
            "Column count mismatch: expected 2 values, got 3"
        );

        let err = Error::DegenerateRange { value: 3.0 };
        assert_eq!(err.to_string(), "Degenerate range: all values equal 3");

        let err = Error::UnknownColumn("income".to_string());
        assert_eq!(err.to_string(), "Unknown column: income");
    }

    #[test]
    fn test_error_helper_functions() {
        let err = Error::invalid_quantile(1.5);
        assert_eq!(err.to_string(), "Invalid parameter: Quantile 1.5 must be in [0, 1]");

        let err = Error::non_finite("histogram input");
        assert_eq!(
            err.to_string(),
            "Non-finite input: histogram input contains NaN or infinite values"
        );
    }

    #[test]
    fn test_guards() {
        assert!(ensure_non_empty(&[], "median").is_err());
        assert!(ensure_non_empty(&[1.0], "median").is_ok());

        assert!(ensure_finite(&[1.0, 2.0], "data").is_ok());
        assert!(matches!(
            ensure_finite(&[1.0, f64::NAN], "data"),
            Err(Error::NonFinite(_))
        ));
        assert!(ensure_finite(&[f64::INFINITY], "data").is_err());
    }

    #[test]
    fn test_error_from_io_error() {
        use std::io;

        let io_err = io::Error::new(io::ErrorKind::NotFound, "file not found");
        let err: Error = io_err.into();

        match err {
            Error::Io(_) => assert!(err.to_string().contains("file not found")),
            _ => panic!("Wrong error type"),
        }
    }
}
