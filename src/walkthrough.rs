//! The classroom session: statistics, summaries and outlier sensitivity
//!
//! Every step takes its data explicitly and writes its findings to `out`;
//! charts go to whatever renderer the caller passes in.

use crate::datasets::{GROUPS, HEIGHTS, HEIGHT_COLUMNS, INCOME, OUTLIERS, YEARS};
use anyhow::{Context, Result};
use descriptive_core::{mean, mode, Mode, Sample};
use descriptive_histogram::histogram;
use descriptive_table::Table;
use descriptive_viz::{render_histogram, ChartRenderer};
use std::io::Write;
use tracing::info_span;

/// Headline numbers produced by [`run`]
#[derive(Debug, Clone, PartialEq)]
pub struct Report {
    pub height_mean: f64,
    pub height_median: f64,
    pub first_row_mode: Mode,
    pub height_variance: f64,
    pub height_stddev: f64,
    pub height_counts: Vec<usize>,
    /// Income mean before any outlier was appended
    pub income_mean: f64,
    /// Income mean after appending `[50, 35]`
    pub income_mean_with_outlier: f64,
    /// Income mean after appending both outliers
    pub income_mean_final: f64,
    /// Mean of the first raw income/years row
    pub first_row_mean: f64,
    pub charts_rendered: usize,
}

impl Report {
    /// How far the outliers pulled the income mean away from the first row's mean
    pub fn difference(&self) -> f64 {
        self.income_mean_final - self.first_row_mean
    }
}

/// Run the full session
pub fn run<W, R>(out: &mut W, renderer: &mut R) -> Result<Report>
where
    W: Write,
    R: ChartRenderer + ?Sized,
{
    let mut charts_rendered = 0;
    // Disabled renderers skip every chart
    let per_chart = usize::from(renderer.is_enabled());

    // Raw sample statistics
    let span = info_span!("heights").entered();
    let heights = Sample::from_rows(&HEIGHTS).context("building height sample")?;
    writeln!(out, "{heights}")?;

    let height_mean = heights.mean()?;
    let height_median = heights.median()?;
    let first_row = heights.row(0).context("height sample has no rows")?;
    let first_row_mode = mode(first_row)?;
    let height_variance = heights.variance()?;
    let height_stddev = heights.stddev()?;

    writeln!(out, "mean: {height_mean:.4}")?;
    writeln!(out, "median: {height_median:.4}")?;
    writeln!(out, "mode of first row: {first_row_mode}")?;
    writeln!(out, "variance (population): {height_variance:.6}")?;
    writeln!(out, "stddev (population): {height_stddev:.6}")?;

    let (height_counts, height_edges) = histogram(heights.values(), 5)?;
    writeln!(out, "histogram counts: {height_counts:?}")?;
    writeln!(out, "histogram edges: {height_edges:.3?}")?;

    render_histogram(
        renderer,
        heights.values(),
        5,
        "Height histogram",
        "Height",
        "Frequency",
    )
    .context("rendering height histogram")?;
    charts_rendered += per_chart;

    let height_table = Table::from_rows(HEIGHT_COLUMNS, &HEIGHTS)?.with_index_start(1);
    writeln!(out, "\n{}", height_table.summarize()?)?;
    drop(span);

    // Income and years of study
    let _span = info_span!("groups").entered();
    let mut groups = Table::from_rows([INCOME, YEARS], &GROUPS)?.with_index_start(1);
    writeln!(out, "\n{groups}")?;

    let summary = groups.summarize()?;
    writeln!(out, "\n{summary}")?;
    let income_mean = summary
        .get(INCOME)
        .map(|stats| stats.mean)
        .context("income column missing from summary")?;

    for (column, title) in [
        (INCOME, "Income histogram"),
        (YEARS, "Years of study histogram"),
    ] {
        render_histogram(renderer, groups.column(column)?, 6, title, column, "Frequency")
            .with_context(|| format!("rendering {column} histogram"))?;
        charts_rendered += per_chart;
    }

    // Outliers
    let mut income_means = Vec::with_capacity(OUTLIERS.len());
    for outlier in &OUTLIERS {
        let label = groups.append_row(outlier)?;
        tracing::info!(label, ?outlier, "appended outlier row");
        writeln!(out, "\n{groups}")?;

        let summary = groups.summarize()?;
        writeln!(out, "\n{summary}")?;
        income_means.push(groups.column_mean(INCOME)?);
    }
    let income_mean_with_outlier = income_means[0];
    let income_mean_final = income_means[income_means.len() - 1];

    let first_row_mean = mean(&GROUPS[0])?;
    let report = Report {
        height_mean,
        height_median,
        first_row_mode,
        height_variance,
        height_stddev,
        height_counts,
        income_mean,
        income_mean_with_outlier,
        income_mean_final,
        first_row_mean,
        charts_rendered,
    };

    writeln!(out, "\n{INCOME} mean: {income_mean_final:.4}")?;
    writeln!(out, "first row mean: {first_row_mean:.4}")?;
    writeln!(out, "difference: {:.4}", report.difference())?;
    writeln!(out, "Outliers shift the mean.")?;

    Ok(report)
}
