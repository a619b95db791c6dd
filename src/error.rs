use std::path::PathBuf;

use matcher::MatchError;
use thiserror::Error;

use crate::config::ConfigLoadError;

/// Errors surfaced by the table-level matching run.
#[derive(Debug, Error)]
pub enum SheetmatchError {
    #[error(transparent)]
    Config(#[from] ConfigLoadError),

    #[error(transparent)]
    Match(#[from] MatchError),

    #[error("failed to open {path}: {source}")]
    Open {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed table: {0}")]
    Csv(#[from] csv::Error),

    #[error("failed to write output: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to encode JSON output: {0}")]
    Json(#[from] serde_json::Error),

    #[error("column {column:?} not found; available columns: {}", .available.join(", "))]
    MissingColumn {
        column: String,
        available: Vec<String>,
    },
}
