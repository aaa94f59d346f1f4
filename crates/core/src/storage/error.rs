use thiserror::Error;

use crate::catalog::ProductError;

/// Errors that can occur during repository operations.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RepositoryError {
    #[error("{entity_type} not found: {id}")]
    NotFound {
        entity_type: &'static str,
        id: String,
    },
    #[error("Connection failed: {0}")]
    ConnectionFailed(String),
    #[error("Query failed: {0}")]
    QueryFailed(String),
    #[error("Serialization error: {0}")]
    Serialization(String),
    #[error("Invalid data: {0}")]
    InvalidData(String),
}

impl RepositoryError {
    /// Returns true if the caller sent something the repository refuses.
    pub fn is_client_fault(&self) -> bool {
        matches!(
            self,
            RepositoryError::InvalidData(_) | RepositoryError::NotFound { .. }
        )
    }
}

impl From<ProductError> for RepositoryError {
    fn from(err: ProductError) -> Self {
        RepositoryError::InvalidData(err.to_string())
    }
}

/// Result type for repository operations.
pub type Result<T> = std::result::Result<T, RepositoryError>;
