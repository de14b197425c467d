use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::Write;
use std::path::Path;
use tracing::info;

use crate::analysis::{RejectionRegion, TestSummary};
use crate::data::RawTable;
use crate::error::Result;

/// JSON form of a finished run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SummaryReport {
    pub generated_at: DateTime<Utc>,
    pub input: String,
    pub matches: usize,
    pub summary: TestSummary,
    pub region: RejectionRegion,
    pub reject_null: bool,
}

impl SummaryReport {
    pub fn new(input: &Path, summary: TestSummary, region: RejectionRegion) -> Self {
        Self {
            generated_at: Utc::now(),
            input: input.display().to_string(),
            matches: summary.n,
            reject_null: summary.rejects_null(region.alpha),
            summary,
            region,
        }
    }
}

/// Render the first `n` rows with a header line, column-aligned.
pub fn format_preview(table: &RawTable, n: usize) -> String {
    let rows = table.head(n);
    let index_width = rows.len().saturating_sub(1).to_string().len();

    let mut widths: Vec<usize> = table.columns.iter().map(|c| c.chars().count()).collect();
    for row in rows {
        for (i, cell) in row.iter().enumerate() {
            if let Some(w) = widths.get_mut(i) {
                *w = (*w).max(cell.chars().count());
            }
        }
    }

    let mut out = String::new();
    out.push_str(&" ".repeat(index_width));
    for (col, w) in table.columns.iter().zip(&widths) {
        out.push_str(&format!("  {:>w$}", col, w = *w));
    }
    out.push('\n');

    for (idx, row) in rows.iter().enumerate() {
        out.push_str(&format!("{:<w$}", idx, w = index_width));
        for (cell, w) in row.iter().zip(&widths) {
            out.push_str(&format!("  {:>w$}", cell, w = *w));
        }
        out.push('\n');
    }
    out
}

/// Print the head of the input and its column names.
pub fn print_preview(table: &RawTable, n: usize) {
    print!("{}", format_preview(table, n));
    println!("Columns: [{}]", table.columns.join(", "));
}

pub fn print_summary(summary: &TestSummary, region: &RejectionRegion) {
    println!("Matches analysed:    {}", summary.n);
    println!("Mean goals:          {}", summary.mean_goals);
    println!("Standard deviation:  {}", summary.std_dev_goals);
    println!("t statistic:         {}", summary.t_stat);
    println!("p-value:             {}", summary.p_value);

    let verdict = if summary.rejects_null(region.alpha) {
        "reject"
    } else {
        "do not reject"
    };
    println!(
        "H0: mean = {} vs H1 ({}) at alpha = {}: {}",
        summary.null_mean, summary.alternative, region.alpha, verdict
    );
}

/// Write the report as pretty JSON, replacing any existing file.
pub fn write_summary_json(report: &SummaryReport, path: &Path) -> Result<()> {
    let json = serde_json::to_string_pretty(report)?;
    let mut file = File::create(path)?;
    file.write_all(json.as_bytes())?;
    info!("Summary written: {}", path.display());
    Ok(())
}
