//! Core types and descriptive statistics
//!
//! This crate provides the error type shared by the descriptive-stats
//! workspace, the [`Sample`] container and the basic measures of central
//! tendency and dispersion.
//!
//! # Conventions
//!
//! - **Median and quantiles** interpolate linearly between order statistics
//!   at position `(n - 1) * p`.
//! - **Mode** ties resolve to the smallest value.
//! - **Variance/stddev** come in two flavours: population (`N`) via
//!   [`variance`]/[`stddev`] and sample (`N - 1`) via
//!   [`sample_variance`]/[`sample_stddev`].
//!
//! # Example
//!
//! ```rust
//! use descriptive_core::{mean, median, stddev, Sample};
//!
//! let sample = Sample::from_rows(&[[1.0, 2.0], [3.0, 4.0]]).unwrap();
//! assert_eq!(sample.mean().unwrap(), 2.5);
//! assert_eq!(median(sample.values()).unwrap(), 2.5);
//! assert!((stddev(&[2.0, 4.0]).unwrap() - 1.0).abs() < 1e-12);
//! assert_eq!(mean(&[1.0, 3.0]).unwrap(), 2.0);
//! ```

pub mod central;
pub mod error;
pub mod quantile;
pub mod sample;
pub mod spread;

pub use central::{mean, median, mode, Mode};
pub use error::{ensure_finite, Error, Result};
pub use quantile::{quantile, quantile_sorted, quantiles, sorted_copy};
pub use sample::Sample;
pub use spread::{sample_stddev, sample_variance, stddev, variance};

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
