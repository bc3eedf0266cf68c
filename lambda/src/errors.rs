use thiserror::Error;

pub type StoreResult<T> = Result<T, StoreError>;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Missing or invalid configuration: {0}")]
    Configuration(String),

    #[error("Failed to connect to the document store: {0}")]
    Connection(String),

    #[error("Document store operation failed: {0}")]
    Storage(String),

    #[error("Invalid entity data: {0}")]
    Validation(String),
}

impl StoreError {
    /// Whether the connection may be retried by calling again.
    #[must_use]
    pub fn is_retryable(&self) -> bool {
        matches!(self, StoreError::Connection(_))
    }
}

impl From<mongodb::error::Error> for StoreError {
    fn from(error: mongodb::error::Error) -> Self {
        StoreError::Storage(error.to_string())
    }
}

impl From<mongodb::bson::ser::Error> for StoreError {
    fn from(error: mongodb::bson::ser::Error) -> Self {
        StoreError::Storage(format!("BSON encode: {error}"))
    }
}
