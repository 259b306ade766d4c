//! Descriptive statistics toolkit
//!
//! Re-exports the workspace crates under one roof and hosts the classroom
//! walkthrough that the `descriptive-stats` binary runs.
//!
//! - [`descriptive_core`]: error type, [`Sample`], mean/median/mode, variance/stddev
//! - [`descriptive_histogram`]: equal-width histograms
//! - [`descriptive_table`]: labeled tables and `describe`-style summaries
//! - [`descriptive_viz`]: chart rendering behind [`ChartRenderer`]

pub use descriptive_core;
pub use descriptive_histogram;
pub use descriptive_table;
pub use descriptive_viz;

pub use descriptive_core::{
    mean, median, mode, quantile, sample_stddev, sample_variance, stddev, variance, Error, Mode,
    Result, Sample,
};
pub use descriptive_histogram::{fixed_histogram, histogram, Histogram};
pub use descriptive_table::{summarize, Summary, SummaryStats, Table};
pub use descriptive_viz::{render_histogram, ChartRenderer, ChartStyle, HistogramChart};

pub mod datasets;
pub mod walkthrough;
