use thiserror::Error;

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("record not found: {key}")]
    NotFound { key: String },

    #[error("invalid store key: {key}")]
    InvalidKey { key: String },

    #[error("ETag mismatch (expected {expected}, got {actual})")]
    ETagMismatch { expected: String, actual: String },

    #[error("precondition failed for key: {key}")]
    PreconditionFailed { key: String },

    #[error("gave up on {key} after {attempts} conflicting writes")]
    Contended { key: String, attempts: usize },

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("I/O error on {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("store lock poisoned")]
    Poisoned,
}

impl StorageError {
    /// Whether a conditional write lost to a concurrent writer.
    pub fn is_conflict(&self) -> bool {
        matches!(
            self,
            StorageError::ETagMismatch { .. } | StorageError::PreconditionFailed { .. }
        )
    }
}
