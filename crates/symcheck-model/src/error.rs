use thiserror::Error;

/// Errors from model-level validation.
#[derive(Debug, Error)]
pub enum ModelError {
    #[error("matrix has {rows} rows but the table lists {symptoms} symptoms")]
    RowCountMismatch { rows: usize, symptoms: usize },
    #[error("matrix row {row} has {width} cells but the table lists {conditions} conditions")]
    RowWidthMismatch {
        row: usize,
        width: usize,
        conditions: usize,
    },
}

pub type Result<T> = std::result::Result<T, ModelError>;
