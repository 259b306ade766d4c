//! The literal datasets used in the walkthrough

/// Heights in metres, five rows of four
pub const HEIGHTS: [[f64; 4]; 5] = [
    [1.85, 1.80, 1.8, 1.8],
    [1.73, 1.7, 1.75, 1.76],
    [1.65, 1.69, 1.67, 1.6],
    [1.54, 1.57, 1.58, 1.59],
    [1.4, 1.42, 1.45, 1.48],
];

/// Column names for the height table
pub const HEIGHT_COLUMNS: [&str; 4] = ["col1", "col2", "col3", "col4"];

/// Income (thousands) and years of study for ten people
pub const GROUPS: [[f64; 2]; 10] = [
    [10.5, 17.0],
    [6.8, 18.0],
    [20.7, 21.0],
    [18.2, 16.0],
    [8.6, 16.0],
    [25.8, 21.0],
    [22.2, 16.0],
    [5.9, 14.0],
    [7.6, 18.0],
    [11.8, 18.0],
];

pub const INCOME: &str = "income";
pub const YEARS: &str = "years";

/// Rows appended to the income/years table, in order
pub const OUTLIERS: [[f64; 2]; 2] = [[50.0, 35.0], [120.0, 30.0]];
