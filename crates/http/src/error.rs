//! Error handling for the bookshelf HTTP layer

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;
use uuid::Uuid;

/// Cause attached to an error response, serialized as `details`.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum ErrorCause {
    /// Descriptive text of a structured error.
    Fault(String),
    /// Opaque value passed through as-is.
    Value(serde_json::Value),
    #[default]
    None,
}

impl ErrorCause {
    pub fn fault(err: &(dyn std::error::Error + 'static)) -> Self {
        Self::Fault(err.to_string())
    }

    pub fn is_none(&self) -> bool {
        matches!(self, ErrorCause::None)
    }

    fn into_details(self) -> serde_json::Value {
        match self {
            ErrorCause::Fault(text) => serde_json::Value::String(text),
            ErrorCause::Value(value) => value,
            ErrorCause::None => serde_json::Value::Null,
        }
    }
}

/// Body of every error response
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub ok: bool,
    pub message: String,
    pub details: serde_json::Value,
}

/// Application error types that map to HTTP responses
#[derive(Error, Debug)]
pub enum AppError {
    #[error("bad request: {message}")]
    BadRequest { message: String },

    #[error("not found: {message}")]
    NotFound { message: String },

    #[error("conflict: {message}")]
    Conflict { message: String },

    #[error("{message}")]
    Internal { message: String, cause: ErrorCause },
}

impl AppError {
    /// Create a bad request error for missing or invalid input
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::BadRequest {
            message: message.into(),
        }
    }

    /// Create a not found error
    pub fn not_found(message: impl Into<String>) -> Self {
        Self::NotFound {
            message: message.into(),
        }
    }

    /// Create a conflict error
    pub fn conflict(message: impl Into<String>) -> Self {
        Self::Conflict {
            message: message.into(),
        }
    }

    /// Create an internal error caused by `err`
    pub fn internal<E>(message: impl Into<String>, err: &E) -> Self
    where
        E: std::error::Error + 'static,
    {
        Self::Internal {
            message: message.into(),
            cause: ErrorCause::fault(err),
        }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            AppError::BadRequest { .. } => StatusCode::BAD_REQUEST,
            AppError::NotFound { .. } => StatusCode::NOT_FOUND,
            AppError::Conflict { .. } => StatusCode::CONFLICT,
            AppError::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        let (message, cause) = match self {
            AppError::BadRequest { message }
            | AppError::NotFound { message }
            | AppError::Conflict { message } => (message, ErrorCause::None),
            AppError::Internal { message, cause } => (message, cause),
        };

        handle_http(&message, Some(status), cause)
    }
}

/// Log `message` with its cause and build the `{ok, message, details}` response.
///
/// `status` defaults to 500.
pub fn handle_http(message: &str, status: Option<StatusCode>, cause: ErrorCause) -> Response {
    let status = status.unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);

    if status.is_server_error() || !cause.is_none() {
        let error_id = Uuid::now_v7();
        tracing::error!(
            error_id = %error_id,
            status_code = %status.as_u16(),
            cause = ?cause,
            "{}",
            message
        );
    } else {
        tracing::warn!(status_code = %status.as_u16(), "{}", message);
    }

    let body = ErrorBody {
        ok: false,
        message: message.to_string(),
        details: cause.into_details(),
    };

    (status, Json(body)).into_response()
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::to_bytes;
    use serde_json::{json, Value};

    async fn body_json(response: Response) -> Value {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn test_error_response_mapping() {
        let response = AppError::not_found("Book 9 no encontrado").into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert_eq!(
            body_json(response).await,
            json!({"ok": false, "message": "Book 9 no encontrado", "details": null})
        );
    }

    #[tokio::test]
    async fn test_internal_error_mapping() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "books.json missing");
        let response = AppError::internal("Something crashed your app", &io).into_response();

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(
            body_json(response).await,
            json!({
                "ok": false,
                "message": "Something crashed your app",
                "details": "books.json missing"
            })
        );
    }

    #[tokio::test]
    async fn default_status_is_500() {
        let response = handle_http("boom", None, ErrorCause::None);
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[tokio::test]
    async fn opaque_cause_is_passed_through() {
        let cause = ErrorCause::Value(json!({"code": 7}));
        let response = handle_http("odd failure", Some(StatusCode::BAD_GATEWAY), cause);

        assert_eq!(response.status(), StatusCode::BAD_GATEWAY);
        assert_eq!(body_json(response).await["details"], json!({"code": 7}));
    }

    #[test]
    fn conflict_status() {
        assert_eq!(AppError::conflict("dup").status(), StatusCode::CONFLICT);
        assert_eq!(AppError::bad_request("x").status(), StatusCode::BAD_REQUEST);
    }
}
