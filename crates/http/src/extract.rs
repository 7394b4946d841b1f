use axum::{
    body::Bytes,
    extract::{FromRequest, FromRequestParts, Path, Request},
    http::request::Parts,
};
use serde::de::DeserializeOwned;

use crate::error::AppError;

/// JSON body extractor that treats an empty body as `T::default()`.
///
/// Field presence is checked by the handlers, so missing bodies must reach them. A body
/// that is not valid JSON for `T` is rejected with 400.
#[derive(Debug, Clone, Default)]
pub struct JsonBody<T>(pub T);

impl<S, T> FromRequest<S> for JsonBody<T>
where
    S: Send + Sync,
    T: DeserializeOwned + Default,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let bytes = Bytes::from_request(req, state)
            .await
            .map_err(|rejection| AppError::bad_request(rejection.body_text()))?;

        if bytes.iter().all(u8::is_ascii_whitespace) {
            return Ok(Self(T::default()));
        }

        serde_json::from_slice(&bytes)
            .map(Self)
            .map_err(|err| {
                tracing::debug!(error = %err, "rejecting request body");
                AppError::bad_request("cuerpo JSON inválido")
            })
    }
}

/// Path parameters whose rejections use the JSON error envelope.
#[derive(Debug, Clone)]
pub struct PathParam<T>(pub T);

impl<S, T> FromRequestParts<S> for PathParam<T>
where
    S: Send + Sync,
    T: DeserializeOwned + Send,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        Path::<T>::from_request_parts(parts, state)
            .await
            .map(|Path(value)| Self(value))
            .map_err(|rejection| AppError::bad_request(rejection.body_text()))
    }
}

/// Value of a required text field; empty strings count as missing.
pub fn required(field: &Option<String>) -> Option<&str> {
    field.as_deref().filter(|value| !value.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::StatusCode;
    use serde::Deserialize;

    #[derive(Debug, Default, Deserialize, PartialEq)]
    struct Payload {
        name: Option<String>,
    }

    async fn extract(body: &'static str) -> Result<JsonBody<Payload>, AppError> {
        let req = Request::builder()
            .method("POST")
            .uri("/")
            .header("content-type", "application/json")
            .body(axum::body::Body::from(body))
            .unwrap();
        JsonBody::<Payload>::from_request(req, &()).await
    }

    #[tokio::test]
    async fn empty_body_is_default() {
        let JsonBody(payload) = extract("").await.unwrap();
        assert_eq!(payload, Payload::default());
    }

    #[tokio::test]
    async fn valid_body_is_decoded() {
        let JsonBody(payload) = extract(r#"{"name":"N","extra":1}"#).await.unwrap();
        assert_eq!(payload.name.as_deref(), Some("N"));
    }

    #[tokio::test]
    async fn malformed_body_is_bad_request() {
        let err = extract("{name").await.unwrap_err();
        assert_eq!(err.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn empty_string_is_missing() {
        assert_eq!(required(&Some(String::new())), None);
        assert_eq!(required(&None), None);
        assert_eq!(required(&Some("A".into())), Some("A"));
    }
}
