use crate::handler::env::EnvError;
use reqwest::StatusCode;
use std::path::PathBuf;
use thiserror::Error;
#[derive(Debug, Error)]
pub enum ReportError {
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("HTTP {status} for {url}")]
    Status { status: StatusCode, url: String },

    #[error("Environment error: {0}")]
    Env(#[from] EnvError),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to read skip list {path}: {source}")]
    SkipFile {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },
}
