use thiserror::Error;

use models::errors::ModelError;

/// Classified outcome of a failed service call. The transport layer maps each
/// kind to its own response; nothing here knows about HTTP.
#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("invalid input: {0}")]
    InvalidInput(String),
    #[error("not found: {0}")]
    NotFound(String),
    #[error("internal failure: {0}")]
    Internal(String),
}

impl ServiceError {
    pub fn not_found(entity: &str) -> Self { Self::NotFound(format!("{} not found", entity)) }

    /// Stable numeric code for external mapping/logging
    pub fn code(&self) -> u16 {
        match self {
            ServiceError::InvalidInput(_) => 1001,
            ServiceError::NotFound(_) => 1003,
            ServiceError::Internal(_) => 1200,
        }
    }

    /// Short label used for logs and metric labels.
    pub fn kind(&self) -> &'static str {
        match self {
            ServiceError::InvalidInput(_) => "invalid_input",
            ServiceError::NotFound(_) => "not_found",
            ServiceError::Internal(_) => "internal",
        }
    }
}

impl From<ModelError> for ServiceError {
    fn from(e: ModelError) -> Self {
        match e {
            ModelError::NotFound => ServiceError::not_found("customer"),
            ModelError::Db(msg) => ServiceError::Internal(msg),
        }
    }
}
