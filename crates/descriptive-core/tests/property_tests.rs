//! Property-based checks for the descriptive statistics

use approx::assert_relative_eq;
use descriptive_core::{mean, median, mode, stddev, variance, Sample};
use proptest::prelude::*;

const HEIGHTS: [[f64; 4]; 5] = [
    [1.85, 1.80, 1.8, 1.8],
    [1.73, 1.7, 1.75, 1.76],
    [1.65, 1.69, 1.67, 1.6],
    [1.54, 1.57, 1.58, 1.59],
    [1.4, 1.42, 1.45, 1.48],
];

#[test]
fn test_height_sample_statistics() {
    let sample = Sample::from_rows(&HEIGHTS).unwrap();
    assert_eq!(sample.len(), 20);

    assert_relative_eq!(sample.mean().unwrap(), 1.6415, epsilon = 1e-9);
    assert_relative_eq!(sample.median().unwrap(), 1.66, epsilon = 1e-9);
    assert_relative_eq!(sample.variance().unwrap(), 0.01764275, epsilon = 1e-9);
    assert_relative_eq!(sample.stddev().unwrap(), 0.132826014, epsilon = 1e-8);
}

#[test]
fn test_mode_of_first_row() {
    let sample = Sample::from_rows(&HEIGHTS).unwrap();
    let m = mode(sample.row(0).unwrap()).unwrap();
    assert_eq!(m.value, 1.8);
    assert_eq!(m.count, 3);
}

fn finite_values() -> impl Strategy<Value = Vec<f64>> {
    prop::collection::vec(-1.0e6..1.0e6f64, 1..64)
}

proptest! {
    #[test]
    fn variance_is_mean_squared_deviation(data in finite_values()) {
        let mu = mean(&data).unwrap();
        let deviations: Vec<f64> = data.iter().map(|x| (x - mu).powi(2)).collect();
        let expected = mean(&deviations).unwrap();
        let actual = variance(&data).unwrap();
        prop_assert!((actual - expected).abs() <= 1e-9 * expected.max(1.0));
    }

    #[test]
    fn stddev_is_sqrt_of_variance(data in finite_values()) {
        prop_assert_eq!(stddev(&data).unwrap(), variance(&data).unwrap().sqrt());
    }

    #[test]
    fn median_ignores_order(
        (data, shuffled) in finite_values()
            .prop_flat_map(|data| (Just(data.clone()), Just(data).prop_shuffle()))
    ) {
        prop_assert_eq!(median(&data).unwrap(), median(&shuffled).unwrap());
    }

    #[test]
    fn mode_count_never_exceeds_len(data in prop::collection::vec(0i32..5, 1..40)) {
        let values: Vec<f64> = data.iter().map(|&x| f64::from(x)).collect();
        let m = mode(&values).unwrap();
        let occurrences = values.iter().filter(|&&x| x == m.value).count();
        prop_assert_eq!(m.count, occurrences);
        // No smaller value may have the same frequency
        for &other in &values {
            if other < m.value {
                let c = values.iter().filter(|&&x| x == other).count();
                prop_assert!(c < m.count);
            }
        }
    }
}
