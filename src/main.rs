use anyhow::Result;
use descriptive_stats::descriptive_viz::SvgChartRenderer;
use descriptive_stats::walkthrough;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

const CHART_DIR_VAR: &str = "DESCRIPTIVE_STATS_CHART_DIR";

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let chart_dir = std::env::var_os(CHART_DIR_VAR)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("target").join("charts"));
    let mut renderer = SvgChartRenderer::new(chart_dir);

    let stdout = std::io::stdout();
    let report = walkthrough::run(&mut stdout.lock(), &mut renderer)?;

    tracing::info!(
        charts = report.charts_rendered,
        dir = %renderer.output_dir().display(),
        "walkthrough finished"
    );
    Ok(())
}
