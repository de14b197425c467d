use std::fs::File;
use std::path::Path;
use tracing::{debug, info};

use super::models::RawTable;
use crate::error::{AnalysisError, Result};

/// Read a delimited file with a header row into a [`RawTable`].
///
/// Row order and column names are preserved; cells are trimmed. A missing file
/// or a ragged/malformed record is an error.
pub fn load_table(path: &Path, delimiter: u8) -> Result<RawTable> {
    let file = File::open(path).map_err(|source| AnalysisError::Open {
        path: path.to_path_buf(),
        source,
    })?;

    let mut reader = csv::ReaderBuilder::new()
        .delimiter(delimiter)
        .trim(csv::Trim::All)
        .from_reader(file);

    let columns: Vec<String> = reader.headers()?.iter().map(str::to_string).collect();
    debug!("Header columns: {:?}", columns);

    let mut rows = Vec::new();
    for record in reader.records() {
        let record = record?;
        rows.push(record.iter().map(str::to_string).collect());
    }

    info!("Loaded {} rows from {}", rows.len(), path.display());
    Ok(RawTable { columns, rows })
}
