use thiserror::Error;

use crate::ingest::IngestError;

#[derive(Debug, Error)]
pub enum SessionError {
    #[error("No dataset is loaded")]
    NothingLoaded,
    #[error(transparent)]
    Ingest(#[from] IngestError)
}
