use crate::infrastructure::storage::StorageError;

/// Main application error type
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("External service error: {0}")]
    ExternalService(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl AppError {
    /// Whether the failure came from something outside the process (network, provider)
    pub fn is_external(&self) -> bool {
        matches!(self, Self::ExternalService(_))
    }
}

/// Custom result type for the application
pub type AppResult<T> = Result<T, AppError>;
