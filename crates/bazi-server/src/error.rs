//! Server error types.

use axum::Json;
use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;
use thiserror::Error;

use bazi_core::BaziError;

/// Errors surfaced to API clients.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The birth date or time could not be parsed.
    #[error(transparent)]
    Input(#[from] BaziError),
    /// The request body is not valid JSON or does not match the expected shape.
    #[error("{}", .0.body_text())]
    BadRequest(#[from] JsonRejection),
    /// The session id is malformed or unknown.
    #[error("session not found (請重新排盤)")]
    SessionNotFound,
}

impl ApiError {
    /// HTTP status for this error.
    pub fn status(&self) -> StatusCode {
        match self {
            Self::Input(_) => StatusCode::BAD_REQUEST,
            Self::BadRequest(rejection) => rejection.status(),
            Self::SessionNotFound => StatusCode::NOT_FOUND,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        tracing::warn!(%status, error = %self, "request rejected");
        (status, Json(json!({ "detail": self.to_string() }))).into_response()
    }
}

/// Errors from configuring or running the server.
#[derive(Debug, Error)]
pub enum ServerError {
    /// `BAZI_BIND` is not a socket address.
    #[error("invalid bind address: {0}")]
    InvalidBind(String),
    /// `BAZI_HORIZON` is not a positive integer.
    #[error("invalid horizon: {0}")]
    InvalidHorizon(String),
    /// Binding or serving failed.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Convenience alias for server results.
pub type ServerResult<T> = Result<T, ServerError>;
