use axum::{http::StatusCode, response::IntoResponse, response::Response, Json};
use serde::Serialize;

/// Success envelope returned by mutating endpoints.
#[derive(Debug, Serialize)]
pub struct Envelope<T> {
    pub ok: bool,
    pub message: String,
    pub data: T,
}

impl<T: Serialize> Envelope<T> {
    pub fn new(message: impl Into<String>, data: T) -> Self {
        Self {
            ok: true,
            message: message.into(),
            data,
        }
    }
}

/// 201 with the envelope.
pub fn created<T: Serialize>(message: impl Into<String>, data: T) -> Response {
    (StatusCode::CREATED, Json(Envelope::new(message, data))).into_response()
}

/// 200 with the envelope.
pub fn ok<T: Serialize>(message: impl Into<String>, data: T) -> Response {
    (StatusCode::OK, Json(Envelope::new(message, data))).into_response()
}
