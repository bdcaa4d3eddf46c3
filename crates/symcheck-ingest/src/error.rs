use symcheck_model::ModelError;
use thiserror::Error;

/// Errors from dataset loading.
#[derive(Debug, Error)]
pub enum IngestError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),
    #[error(transparent)]
    Shape(#[from] ModelError),
    #[error("row {row}, column '{column}': '{value}' is not a presence value")]
    BadCell {
        row: usize,
        column: String,
        value: String,
    },
    #[error("dataset lists no symptoms or no conditions")]
    EmptyDataset,
}

pub type Result<T> = std::result::Result<T, IngestError>;
