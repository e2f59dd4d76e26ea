use thiserror::Error;
use uuid::Uuid;

/// Store-level error type.
///
/// Decode problems never show up here: unreadable persisted data degrades to
/// an empty document. Callers get an error only when a write could not be
/// completed or an operation was rejected outright.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Storage error for key '{key}': {source}")]
    Io {
        key: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Encoding error for key '{key}': {source}")]
    Encode {
        key: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Not found: {0}")]
    NotFound(Uuid),

    #[error("Not implemented: {0}")]
    NotImplemented(&'static str),
}

impl StoreError {
    /// Short machine-readable code, for hosts that map errors to UI notices.
    pub fn code(&self) -> &'static str {
        match self {
            StoreError::Io { .. } => "STORAGE_ERROR",
            StoreError::Encode { .. } => "ENCODING_ERROR",
            StoreError::Validation(_) => "VALIDATION_ERROR",
            StoreError::NotFound(_) => "NOT_FOUND",
            StoreError::NotImplemented(_) => "NOT_IMPLEMENTED",
        }
    }
}
