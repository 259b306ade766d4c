//! Histogram behaviour on the classroom datasets and random inputs

use approx::assert_relative_eq;
use descriptive_histogram::{fixed_histogram, histogram};
use proptest::prelude::*;

const HEIGHTS: [f64; 20] = [
    1.85, 1.80, 1.8, 1.8, 1.73, 1.7, 1.75, 1.76, 1.65, 1.69, 1.67, 1.6, 1.54, 1.57, 1.58, 1.59,
    1.4, 1.42, 1.45, 1.48,
];

const INCOME: [f64; 10] = [10.5, 6.8, 20.7, 18.2, 8.6, 25.8, 22.2, 5.9, 7.6, 11.8];
const YEARS: [f64; 10] = [17.0, 18.0, 21.0, 16.0, 16.0, 21.0, 16.0, 14.0, 18.0, 18.0];

#[test]
fn test_height_histogram() {
    let (counts, edges) = histogram(&HEIGHTS, 5).unwrap();

    assert_eq!(counts, vec![4, 2, 4, 5, 5]);
    assert_eq!(edges.len(), 6);
    let expected = [1.4, 1.49, 1.58, 1.67, 1.76, 1.85];
    for (edge, want) in edges.iter().zip(expected) {
        assert_relative_eq!(*edge, want, epsilon = 1e-12);
    }
}

#[test]
fn test_income_and_years_histograms() {
    let (income_counts, income_edges) = histogram(&INCOME, 6).unwrap();
    assert_eq!(income_counts, vec![4, 2, 0, 1, 2, 1]);
    assert_eq!(income_edges[0], 5.9);
    assert_eq!(income_edges[6], 25.8);

    let (year_counts, _) = histogram(&YEARS, 6).unwrap();
    assert_eq!(year_counts, vec![1, 3, 1, 3, 0, 2]);
}

#[test]
fn test_outlier_stretches_buckets() {
    let mut income = INCOME.to_vec();
    income.push(50.0);

    let hist = fixed_histogram(&income, 6).unwrap();
    assert_eq!(hist.counts(), vec![6, 1, 3, 0, 0, 1]);
    assert_eq!(hist.max(), 50.0);
}

proptest! {
    #[test]
    fn counts_sum_to_len(
        data in prop::collection::vec(-1.0e3..1.0e3f64, 1..128),
        buckets in 1usize..32,
    ) {
        let (counts, edges) = histogram(&data, buckets).unwrap();
        prop_assert_eq!(counts.len(), buckets);
        prop_assert_eq!(edges.len(), buckets + 1);
        prop_assert_eq!(counts.iter().sum::<usize>(), data.len());
        prop_assert!(edges.windows(2).all(|w| w[0] <= w[1]));
    }
}
