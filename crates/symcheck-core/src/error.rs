use symcheck_ingest::IngestError;
use thiserror::Error;

/// Session-fatal failures.
///
/// Only the primary dataset load can kill a session; everything downstream
/// degrades into warnings or empty results.
#[derive(Debug, Error)]
pub enum SessionError {
    #[error("failed to load the prevalence dataset: {0}")]
    DataLoad(#[from] IngestError),
}
