// src/application/error.rs
use crate::domain::errors::DomainError;
use thiserror::Error;

pub type ApplicationResult<T> = Result<T, ApplicationError>;

#[derive(Debug, Error)]
pub enum ApplicationError {
    #[error("malformed request body: {0}")]
    Decode(String),

    #[error("validation error: {0}")]
    Validation(String),

    #[error("invalid parameter: {0}")]
    Parameter(String),

    #[error("resource not found: {0}")]
    NotFound(String),

    #[error("persistence failure: {0}")]
    Persistence(String),

    #[error("method not allowed: {0}")]
    MethodNotAllowed(String),
}

impl From<DomainError> for ApplicationError {
    fn from(err: DomainError) -> Self {
        match err {
            DomainError::Validation(msg) => Self::Validation(msg),
            DomainError::NotFound(msg) => Self::NotFound(msg),
            DomainError::Persistence(msg) => Self::Persistence(msg),
        }
    }
}

impl ApplicationError {
    pub fn decode(msg: impl Into<String>) -> Self {
        Self::Decode(msg.into())
    }

    pub fn parameter(msg: impl Into<String>) -> Self {
        Self::Parameter(msg.into())
    }

    pub fn method_not_allowed(msg: impl Into<String>) -> Self {
        Self::MethodNotAllowed(msg.into())
    }

    /// Convert a repository failure, replacing store detail with `context`.
    /// The detail is logged here, once, and never reaches the client.
    pub fn from_store(context: &str, err: DomainError) -> Self {
        match err {
            DomainError::Persistence(detail) => {
                tracing::error!(error = %detail, "{context}");
                Self::Persistence(context.to_string())
            }
            other => Self::from(other),
        }
    }
}
