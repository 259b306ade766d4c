//! Labeled numeric tables and per-column summaries
//!
//! A [`Table`] has a fixed set of named columns and an integer row index.
//! Rows can be appended at any time; [`summarize`] reports count, mean,
//! sample standard deviation, min, quartiles and max for every column.
//!
//! # Example
//!
//! ```rust
//! use descriptive_table::Table;
//!
//! let mut table = Table::from_rows(["income", "years"], &[[10.5, 17.0], [6.8, 18.0]])
//!     .unwrap()
//!     .with_index_start(1);
//!
//! let before = table.summarize().unwrap().get("income").unwrap().mean;
//! let label = table.append_row(&[50.0, 35.0]).unwrap();
//! let after = table.summarize().unwrap().get("income").unwrap().mean;
//!
//! assert_eq!(label, 3);
//! assert!(after > before);
//! ```

pub mod summary;
pub mod table;

pub use summary::{summarize, Summary, SummaryStats};
pub use table::Table;

pub use descriptive_core::{Error, Result};
