use std::path::PathBuf;
use thiserror::Error;

/// Failures of the goal analysis pipeline.
#[derive(Error, Debug)]
pub enum AnalysisError {
    #[error("failed to open {path}: {source}")]
    Open {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("column '{0}' not found in header")]
    MissingColumn(String),

    #[error("row {row}: invalid goal value '{value}' (expected a non-negative integer)")]
    InvalidGoal { row: usize, value: String },

    #[error("row {row}: {goals} goals is above the per-team limit of {max}")]
    GoalOutOfRange { row: usize, goals: u32, max: u32 },

    #[error("goal total of {home_team} vs {away_team} overflows")]
    GoalOverflow { home_team: String, away_team: String },

    #[error("row {row}: empty match id")]
    EmptyMatchId { row: usize },

    #[error("row {index} ({team}) has no opponent row: positional pairing needs an even row count")]
    UnpairedRow { index: usize, team: String },

    #[error("match '{0}' has only one team row")]
    IncompleteMatch(String),

    #[error("match '{match_id}' has {rows} team rows, expected 2")]
    OverfullMatch { match_id: String, rows: usize },

    #[error("need at least 2 matches for a t-test, got {0}")]
    InsufficientSample(usize),

    #[error("distribution error: {0}")]
    Distribution(String),

    #[error("failed to render {path}: {message}")]
    Plot { path: PathBuf, message: String },

    #[error("failed to serialize summary: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, AnalysisError>;
