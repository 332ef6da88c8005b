use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;
use thiserror::Error;

use ferrodash_core::DatasetError;

/// Errors returned by request handlers.
#[derive(Debug, Error)]
pub enum WebError {
    #[error("bad request: {0}")]
    BadRequest(String),

    #[error("unsupported media type: {0}")]
    UnsupportedMediaType(String),

    #[error("not found: {0}")]
    NotFound(String),
}

impl WebError {
    pub const fn status(&self) -> StatusCode {
        match self {
            Self::BadRequest(_) => StatusCode::BAD_REQUEST,
            Self::UnsupportedMediaType(_) => StatusCode::UNSUPPORTED_MEDIA_TYPE,
            Self::NotFound(_) => StatusCode::NOT_FOUND,
        }
    }

    pub const fn code(&self) -> &'static str {
        match self {
            Self::BadRequest(_) => "bad_request",
            Self::UnsupportedMediaType(_) => "unsupported_media_type",
            Self::NotFound(_) => "not_found",
        }
    }
}

impl IntoResponse for WebError {
    fn into_response(self) -> Response {
        let message = match &self {
            Self::BadRequest(msg) | Self::UnsupportedMediaType(msg) | Self::NotFound(msg) => {
                msg.clone()
            }
        };
        tracing::debug!(code = self.code(), %message, "request rejected");

        let body = json!({ "error": { "code": self.code(), "message": message } });
        (self.status(), Json(body)).into_response()
    }
}

// Syntax errors, unknown themes and invalid identifiers all land here.
impl From<JsonRejection> for WebError {
    fn from(rejection: JsonRejection) -> Self {
        match rejection {
            JsonRejection::MissingJsonContentType(inner) => {
                Self::UnsupportedMediaType(inner.body_text())
            }
            other => Self::BadRequest(other.body_text()),
        }
    }
}

/// Startup failures of the `ferrodash` binary, mapped to exit codes.
#[derive(Debug, Error)]
pub enum ServerError {
    #[error("invalid listen address '{value}': {source}")]
    Address {
        value: String,
        #[source]
        source: std::net::AddrParseError,
    },

    #[error(transparent)]
    Dataset(#[from] DatasetError),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl ServerError {
    pub const fn exit_code(&self) -> u8 {
        match self {
            Self::Address { .. } => 2,
            Self::Dataset(DatasetError::Integrity { .. }) => 5,
            Self::Dataset(_) => 3,
            Self::Io(_) => 10,
        }
    }
}
