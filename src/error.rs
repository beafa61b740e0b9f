/// Unified error types for Stratus
use crate::serializer::response::{
    Response as Envelope, CODE_DB_ERROR, CODE_INTERNAL_SETTING, CODE_NOT_FOUND, CODE_PARAM_ERR,
};
use axum::response::{IntoResponse, Response};
use thiserror::Error;

/// Main error type for the view layer
#[derive(Error, Debug)]
pub enum StratusError {
    /// Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// Validation errors
    #[error("Validation error: {0}")]
    Validation(String),

    /// Opaque identifier could not be decoded
    #[error("Invalid identifier: {0}")]
    InvalidId(String),

    /// Not found errors
    #[error("Not found: {0}")]
    NotFound(String),

    /// Data-access collaborator failures
    #[error("Store error: {0}")]
    Store(String),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Seed or payload decoding errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Internal server errors
    #[error("Internal error: {0}")]
    Internal(String),
}

impl StratusError {
    /// Application status code carried in the response envelope
    pub fn code(&self) -> i32 {
        match self {
            StratusError::Validation(_) | StratusError::InvalidId(_) => CODE_PARAM_ERR,
            StratusError::NotFound(_) => CODE_NOT_FOUND,
            StratusError::Store(_) => CODE_DB_ERROR,
            StratusError::Config(_)
            | StratusError::Io(_)
            | StratusError::Json(_)
            | StratusError::Internal(_) => CODE_INTERNAL_SETTING,
        }
    }
}

/// Convert StratusError to an enveloped HTTP response
impl IntoResponse for StratusError {
    fn into_response(self) -> Response {
        let code = self.code();
        let envelope = match &self {
            StratusError::Validation(_) | StratusError::InvalidId(_) | StratusError::NotFound(_) => {
                Envelope::err(code, self.to_string(), None)
            }
            _ => {
                tracing::error!("request failed: {}", self);
                // Don't leak details
                Envelope::err(code, "Internal server error", None)
            }
        };

        envelope.into_response()
    }
}

/// Result type alias for Stratus operations
pub type StratusResult<T> = Result<T, StratusError>;
