//! Typed errors and HTTP mapping.

use axum::{
    http::{header, StatusCode},
    response::{IntoResponse, Response},
};
use sqlx::error::ErrorKind;
use thiserror::Error;

pub const DUPLICATE_NAME_MESSAGE: &str = "Dog with the same name already exists";
pub const INVALID_INPUT_MESSAGE: &str = "Invalid input data";
pub const INTERNAL_ERROR_MESSAGE: &str = "Internal Server Error";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("missing configuration: {0}")]
    Missing(&'static str),
    #[error("invalid value for {key}: '{value}'")]
    Invalid { key: &'static str, value: String },
    #[error("unsupported database dialect: {0}")]
    UnsupportedDialect(String),
}

/// Outcome of a failed data-access operation.
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("store unreachable: {0}")]
    Connectivity(#[source] sqlx::Error),
    #[error("unique constraint violated: {0}")]
    UniqueViolation(String),
    #[error("validation: {0}")]
    Validation(String),
    #[error("database: {0}")]
    Other(#[source] sqlx::Error),
}

impl From<sqlx::Error> for StoreError {
    fn from(e: sqlx::Error) -> Self {
        match &e {
            sqlx::Error::PoolTimedOut
            | sqlx::Error::PoolClosed
            | sqlx::Error::Io(_)
            | sqlx::Error::Tls(_)
            | sqlx::Error::Protocol(_) => StoreError::Connectivity(e),
            sqlx::Error::Database(db) => match db.kind() {
                ErrorKind::UniqueViolation => StoreError::UniqueViolation(db.message().to_string()),
                ErrorKind::NotNullViolation | ErrorKind::CheckViolation => {
                    StoreError::Validation(db.message().to_string())
                }
                _ => StoreError::Other(e),
            },
            _ => StoreError::Other(e),
        }
    }
}

/// Error returned by handlers; every variant renders as a plain-text body.
#[derive(Error, Debug)]
pub enum AppError {
    #[error("duplicate dog name")]
    DuplicateName,
    #[error("invalid input: {0}")]
    InvalidInput(String),
    #[error("internal: {0}")]
    Internal(String),
}

impl AppError {
    /// Create-path translation: duplicate and validation failures are the client's fault.
    pub fn from_create(e: StoreError) -> Self {
        match e {
            StoreError::UniqueViolation(_) => AppError::DuplicateName,
            StoreError::Validation(msg) => AppError::InvalidInput(msg),
            other => AppError::Internal(other.to_string()),
        }
    }

    /// List-path translation: nothing the caller sends is reported as a 4xx.
    pub fn from_list(e: StoreError) -> Self {
        AppError::Internal(e.to_string())
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, body) = match &self {
            AppError::DuplicateName => (StatusCode::BAD_REQUEST, DUPLICATE_NAME_MESSAGE),
            AppError::InvalidInput(reason) => {
                tracing::debug!(%reason, "rejected create request");
                (StatusCode::BAD_REQUEST, INVALID_INPUT_MESSAGE)
            }
            AppError::Internal(reason) => {
                tracing::error!(%reason, "request failed");
                (StatusCode::INTERNAL_SERVER_ERROR, INTERNAL_ERROR_MESSAGE)
            }
        };
        (status, [(header::CONTENT_TYPE, "text/plain; charset=utf-8")], body).into_response()
    }
}
