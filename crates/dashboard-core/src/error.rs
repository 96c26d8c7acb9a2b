// File: crates/dashboard-core/src/error.rs
// Summary: Error type shared by the dashboard core.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum DashboardError {
    /// The page path has no final segment to use as the target file.
    #[error("no file name in page path '{0}'")]
    MissingFileName(String),

    #[error("invalid chart specification: {0}")]
    InvalidChart(String),

    #[error("malformed JSON: {0}")]
    Json(#[from] serde_json::Error),
}
