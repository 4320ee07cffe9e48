//! Error types and HTTP response conversion

use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use thiserror::Error;

use crate::response::ApiResponse;

/// Application error type
#[derive(Debug, Error)]
pub enum Error {
    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(Box<figment::Error>),

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Request body failed to bind to the expected JSON shape.
    ///
    /// The extractor's message is embedded verbatim in the response envelope.
    #[error("request parameter error: {0}")]
    RequestBinding(String),
}

/// Result type alias using the application error
pub type Result<T, E = Error> = std::result::Result<T, E>;

impl From<figment::Error> for Error {
    fn from(err: figment::Error) -> Self {
        Self::Config(Box::new(err))
    }
}

impl From<JsonRejection> for Error {
    fn from(rejection: JsonRejection) -> Self {
        Self::RequestBinding(rejection.body_text())
    }
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        let status = match self {
            Error::RequestBinding(_) => StatusCode::BAD_REQUEST,
            Error::Config(_) | Error::Io(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };

        if status.is_server_error() {
            tracing::error!("request failed: {}", self);
        } else {
            tracing::warn!("request rejected: {}", self);
        }

        ApiResponse::error(status, self.to_string()).into_response()
    }
}
