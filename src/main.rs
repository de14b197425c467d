use anyhow::{Context, Result};
use clap::Parser;
use tracing::{info, warn};

mod analysis;
mod config;
mod data;
mod error;
mod plot;
mod report;

use analysis::{one_sample_t_test, RejectionRegion};
use config::Config;
use data::{load_table, pair_by_match_id, pair_positional, total_goals};
use plot::PlotPaths;
use report::SummaryReport;

fn main() -> Result<()> {
    // Initialise tracing / logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let config = Config::parse();
    config.validate()?;

    // validate() guarantees a single-byte delimiter
    let delimiter = config.delimiter_byte().unwrap_or(b';');
    let table = load_table(&config.input, delimiter)
        .with_context(|| format!("loading {}", config.input.display()))?;

    if table.is_empty() {
        warn!("{} has a header but no data rows", config.input.display());
    }
    info!("Input columns: {}, rows: {}", table.columns.len(), table.len());
    report::print_preview(&table, config.head_rows);

    let records = table
        .team_goals(
            &config.team_column,
            &config.goal_column,
            config.match_column.as_deref(),
        )
        .context("reading team goal rows")?;

    let matches = match &config.match_column {
        Some(col) => {
            info!("Pairing home/away rows on column '{}'", col);
            pair_by_match_id(records)
        }
        None => {
            info!("Pairing home/away rows by alternating position");
            pair_positional(records)
        }
    }
    .context("pairing home and away rows")?;

    let totals = total_goals(&matches);
    let summary = one_sample_t_test(&totals, config.null_mean, config.alternative)
        .context("computing t-test")?;
    let region = RejectionRegion::new(config.alpha, config.alternative)?;

    info!(
        "Statistics computed over {} matches (H1: {})",
        summary.n, summary.alternative
    );
    report::print_summary(&summary, &region);

    std::fs::create_dir_all(&config.output_dir).with_context(|| {
        format!("creating output directory {}", config.output_dir.display())
    })?;

    let paths = PlotPaths {
        boxplot: config.boxplot_path(),
        histogram: config.histogram_path(),
        critical: config.critical_path(),
    };
    let written = plot::render_all(&totals, &summary, &region, &paths).context("rendering plots")?;
    info!(
        "{} plots written to {}",
        written.len(),
        config.output_dir.display()
    );

    if let Some(path) = &config.summary_json {
        let report = SummaryReport::new(&config.input, summary, region);
        report::write_summary_json(&report, path)
            .with_context(|| format!("writing {}", path.display()))?;
    }

    Ok(())
}
