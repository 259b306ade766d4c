//! Dispersion: variance and standard deviation
//!
//! Two families are provided and they are not interchangeable:
//!
//! - [`variance`] / [`stddev`] divide by `N` (population statistics). These
//!   are what raw array statistics report.
//! - [`sample_variance`] / [`sample_stddev`] divide by `N - 1` (the unbiased
//!   estimator). Tabular summaries report these.

use crate::central::mean;
use crate::error::{ensure_non_empty, Result};

/// Sum of squared deviations from the mean
fn sum_of_squares(data: &[f64]) -> Result<f64> {
    let mu = mean(data)?;
    Ok(data
        .iter()
        .map(|&x| {
            let diff = x - mu;
            diff * diff
        })
        .sum())
}

/// Population variance (N denominator)
pub fn variance(data: &[f64]) -> Result<f64> {
    ensure_non_empty(data, "variance")?;
    Ok(sum_of_squares(data)? / data.len() as f64)
}

/// Population standard deviation, `sqrt(variance)`
pub fn stddev(data: &[f64]) -> Result<f64> {
    ensure_non_empty(data, "stddev")?;
    Ok(variance(data)?.sqrt())
}

/// Sample variance (N - 1 denominator)
///
/// A single observation has no spread estimate and yields NaN.
pub fn sample_variance(data: &[f64]) -> Result<f64> {
    ensure_non_empty(data, "sample variance")?;
    if data.len() == 1 {
        return Ok(f64::NAN);
    }
    Ok(sum_of_squares(data)? / (data.len() - 1) as f64)
}

/// Sample standard deviation, `sqrt(sample_variance)`
pub fn sample_stddev(data: &[f64]) -> Result<f64> {
    ensure_non_empty(data, "sample stddev")?;
    Ok(sample_variance(data)?.sqrt())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Error;
    use approx::assert_relative_eq;

    #[test]
    fn test_population_vs_sample() {
        let data = vec![2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0];
        assert_relative_eq!(variance(&data).unwrap(), 4.0);
        assert_relative_eq!(stddev(&data).unwrap(), 2.0);
        assert_relative_eq!(sample_variance(&data).unwrap(), 32.0 / 7.0);
        assert_relative_eq!(sample_stddev(&data).unwrap(), (32.0f64 / 7.0).sqrt());
    }

    #[test]
    fn test_constant_data_has_no_spread() {
        let data = vec![3.0; 5];
        assert_eq!(variance(&data).unwrap(), 0.0);
        assert_eq!(sample_variance(&data).unwrap(), 0.0);
    }

    #[test]
    fn test_single_observation() {
        assert_eq!(variance(&[1.5]).unwrap(), 0.0);
        assert!(sample_variance(&[1.5]).unwrap().is_nan());
        assert!(sample_stddev(&[1.5]).unwrap().is_nan());
    }

    #[test]
    fn test_empty_input() {
        assert!(matches!(variance(&[]), Err(Error::EmptyInput { .. })));
        assert!(matches!(stddev(&[]), Err(Error::EmptyInput { .. })));
        assert!(matches!(sample_variance(&[]), Err(Error::EmptyInput { .. })));
        assert!(matches!(sample_stddev(&[]), Err(Error::EmptyInput { .. })));
    }
}
