//! Application error types.
//!
//! Internally errors are structured by kind; at the handler boundary every
//! kind collapses to `500 Internal Server Error` with the error's Display
//! text as a plain-text body.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use thiserror::Error;

/// Result alias using [`AppError`].
pub type AppResult<T> = Result<T, AppError>;

/// Application error kinds.
#[derive(Debug, Error)]
pub enum AppError {
    /// Failed to connect to the database server.
    #[error("database connection error: {0}")]
    DatabaseConnection(String),

    /// A database query failed.
    #[error("database query error: {0}")]
    DatabaseQuery(String),

    /// An upstream HTTP request failed.
    #[error("http error: {0}")]
    Http(String),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        tracing::error!(error = %self, "请求处理失败");
        (StatusCode::INTERNAL_SERVER_ERROR, self.to_string()).into_response()
    }
}

impl From<sqlx::Error> for AppError {
    fn from(e: sqlx::Error) -> Self {
        match e {
            sqlx::Error::PoolTimedOut | sqlx::Error::Io(_) | sqlx::Error::Tls(_) => {
                AppError::DatabaseConnection(e.to_string())
            }
            other => AppError::DatabaseQuery(other.to_string()),
        }
    }
}

impl From<reqwest::Error> for AppError {
    fn from(e: reqwest::Error) -> Self {
        AppError::Http(e.to_string())
    }
}
