//! Order statistics with linear interpolation
//!
//! The `p`-quantile of a sorted sample `x[0..n]` sits at position
//! `h = (n - 1) * p`. When `h` falls between two order statistics the result
//! interpolates linearly between `x[floor(h)]` and `x[floor(h) + 1]`.
//! This is the default convention of most numeric libraries and the one a
//! dataframe `describe` uses for its quartiles.

use crate::error::{ensure_finite, ensure_non_empty, Error, Result};

/// Sort a copy of `data` in ascending order
///
/// Rejects NaN and infinities since they have no meaningful rank.
pub fn sorted_copy(data: &[f64]) -> Result<Vec<f64>> {
    ensure_finite(data, "sample")?;
    let mut sorted = data.to_vec();
    sorted.sort_by(f64::total_cmp);
    Ok(sorted)
}

/// Quantile of already sorted, non-empty data
///
/// Callers that need several quantiles sort once and call this repeatedly.
pub fn quantile_sorted(sorted: &[f64], p: f64) -> Result<f64> {
    ensure_non_empty(sorted, "quantile")?;
    if !(0.0..=1.0).contains(&p) {
        return Err(Error::invalid_quantile(p));
    }

    let n = sorted.len();
    let h = (n - 1) as f64 * p;
    let lo = h.floor() as usize;
    let hi = (lo + 1).min(n - 1);
    let frac = h - lo as f64;

    Ok(sorted[lo] + frac * (sorted[hi] - sorted[lo]))
}

/// Quantile of an unsorted sample
pub fn quantile(data: &[f64], p: f64) -> Result<f64> {
    ensure_non_empty(data, "quantile")?;
    let sorted = sorted_copy(data)?;
    quantile_sorted(&sorted, p)
}

/// Several quantiles of one sample, sorting only once
pub fn quantiles(data: &[f64], ps: &[f64]) -> Result<Vec<f64>> {
    ensure_non_empty(data, "quantiles")?;
    let sorted = sorted_copy(data)?;
    ps.iter().map(|&p| quantile_sorted(&sorted, p)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_quantile_endpoints() {
        let data = vec![3.0, 1.0, 2.0, 5.0, 4.0];
        assert_eq!(quantile(&data, 0.0).unwrap(), 1.0);
        assert_eq!(quantile(&data, 1.0).unwrap(), 5.0);
        assert_eq!(quantile(&data, 0.5).unwrap(), 3.0);
    }

    #[test]
    fn test_quantile_interpolates() {
        // h = 3 * 0.25 = 0.75 -> 10 + 0.75 * (20 - 10)
        let data = vec![10.0, 20.0, 30.0, 40.0];
        assert_relative_eq!(quantile(&data, 0.25).unwrap(), 17.5);
        assert_relative_eq!(quantile(&data, 0.5).unwrap(), 25.0);
        assert_relative_eq!(quantile(&data, 0.75).unwrap(), 32.5);
    }

    #[test]
    fn test_single_observation() {
        assert_eq!(quantile(&[7.0], 0.3).unwrap(), 7.0);
    }

    #[test]
    fn test_quantiles_batch() {
        let data = vec![14.0, 16.0, 16.0, 16.0, 17.0, 18.0, 18.0, 18.0, 21.0, 21.0];
        let qs = quantiles(&data, &[0.25, 0.5, 0.75]).unwrap();
        assert_relative_eq!(qs[0], 16.0);
        assert_relative_eq!(qs[1], 17.5);
        assert_relative_eq!(qs[2], 18.0);
    }

    #[test]
    fn test_invalid_inputs() {
        assert!(matches!(quantile(&[], 0.5), Err(Error::EmptyInput { .. })));
        assert!(matches!(
            quantile(&[1.0, 2.0], 1.5),
            Err(Error::InvalidParameter(_))
        ));
        assert!(matches!(
            quantile(&[1.0, f64::NAN], 0.5),
            Err(Error::NonFinite(_))
        ));
    }
}
