//! Equal-width histograms for descriptive statistics
//!
//! This crate partitions the range of a sequence into equal-width buckets
//! and counts the observations that fall into each one.
//!
//! # Bucket boundaries
//!
//! For `k` buckets over `[min, max]` the boundaries are
//! `min + i * (max - min) / k` for `i < k`, followed by exactly `max`.
//! Buckets are closed on the left and open on the right, except the last
//! which is closed on both ends, so every observation is counted once.
//!
//! # Examples
//!
//! ```rust
//! use descriptive_histogram::histogram;
//!
//! let data = vec![1.0, 2.0, 2.0, 3.0, 4.0];
//! let (counts, edges) = histogram(&data, 3).unwrap();
//!
//! assert_eq!(counts, vec![1, 2, 2]);
//! assert_eq!(edges.len(), 4);
//! assert_eq!(counts.iter().sum::<usize>(), data.len());
//! ```
//!
//! ## Using the builder
//!
//! ```rust
//! use descriptive_histogram::{DegenerateRange, FixedWidthBuilder, HistogramBuilder};
//!
//! let builder = FixedWidthBuilder::new(5).on_degenerate(DegenerateRange::Reject);
//! assert!(builder.build(&[2.0, 2.0, 2.0]).is_err());
//!
//! let hist = builder.build(&[1.0, 2.0, 3.0]).unwrap();
//! for bin in hist.bins() {
//!     println!("{bin}");
//! }
//! ```

pub mod builders;
pub mod traits;
pub mod types;

pub use builders::{DegenerateRange, FixedWidthBuilder};
pub use traits::HistogramBuilder;
pub use types::{Histogram, HistogramBin};

pub use descriptive_core::{Error, Result};

/// Create a histogram with a fixed number of equal-width bins
pub fn fixed_histogram(data: &[f64], num_bins: usize) -> Result<Histogram> {
    FixedWidthBuilder::new(num_bins).build(data)
}

/// Bucket counts and boundaries of `data` split into `bucket_count` bins
///
/// Returns `bucket_count` counts and `bucket_count + 1` boundaries.
pub fn histogram(data: &[f64], bucket_count: usize) -> Result<(Vec<usize>, Vec<f64>)> {
    let hist = fixed_histogram(data, bucket_count)?;
    Ok((hist.counts(), hist.edges()))
}
