use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use restclean_core::api::{ApiMessage, ErrorKind};

/// A classified, client-facing failure.
///
/// The message is what the client sees; storage and decoder details are
/// logged where the error is produced and never end up here.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{} - {}", .kind.code(), .message)]
pub struct ApiError {
    pub kind: ErrorKind,
    pub message: String,
}

impl ApiError {
    pub fn new(kind: ErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }

    pub fn validation(message: impl ToString) -> Self {
        Self::new(ErrorKind::Validation, message.to_string())
    }

    pub fn invalid_input(message: impl ToString) -> Self {
        Self::new(ErrorKind::InvalidInput, message.to_string())
    }

    pub fn body(message: impl ToString) -> Self {
        Self::new(ErrorKind::Body, message.to_string())
    }

    pub fn codec(message: impl ToString) -> Self {
        Self::new(ErrorKind::Codec, message.to_string())
    }

    pub fn internal(message: impl ToString) -> Self {
        Self::new(ErrorKind::Internal, message.to_string())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = StatusCode::from_u16(self.kind.status_code())
            .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);

        tracing::warn!(status = %status, code = self.kind.code(), message = %self.message, "API error");

        (status, Json(ApiMessage::error(self.kind, self.message))).into_response()
    }
}
