//! Central tendency: mean, median and mode

use crate::error::{ensure_finite, ensure_non_empty, Result};
use crate::quantile::quantile;
use ordered_float::OrderedFloat;
use std::collections::BTreeMap;
use std::fmt;

/// Most frequent value of a sequence together with its frequency
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Mode {
    pub value: f64,
    pub count: usize,
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Mode(value={}, count={})", self.value, self.count)
    }
}

/// Arithmetic mean over all observations
pub fn mean(data: &[f64]) -> Result<f64> {
    ensure_non_empty(data, "mean")?;
    Ok(data.iter().sum::<f64>() / data.len() as f64)
}

/// Median, interpolating between the two middle order statistics for even counts
pub fn median(data: &[f64]) -> Result<f64> {
    ensure_non_empty(data, "median")?;
    quantile(data, 0.5)
}

/// Most frequent value and its count
///
/// Values are compared exactly. When several values share the highest
/// frequency the smallest of them wins: values are visited in ascending
/// order and a later value only replaces the current mode when its count is
/// strictly greater.
pub fn mode(data: &[f64]) -> Result<Mode> {
    ensure_non_empty(data, "mode")?;
    ensure_finite(data, "mode input")?;

    let mut frequencies: BTreeMap<OrderedFloat<f64>, usize> = BTreeMap::new();
    for &x in data {
        // -0.0 and 0.0 count as the same value
        let key = if x == 0.0 { 0.0 } else { x };
        *frequencies.entry(OrderedFloat(key)).or_insert(0) += 1;
    }

    let mut best = Mode {
        value: f64::NAN,
        count: 0,
    };
    for (value, count) in frequencies {
        if count > best.count {
            best = Mode {
                value: value.into_inner(),
                count,
            };
        }
    }

    Ok(best)
}
