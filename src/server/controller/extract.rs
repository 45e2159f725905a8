//! Extractors that report rejections as `AppError::BadRequest`.
//!
//! Axum's built-in `Json`, `Query` and `Path` extractors answer malformed input with plain-text
//! bodies and, for JSON, several different status codes. These wrappers keep every
//! client error on the `{ "msg": ... }` contract.

use axum::{
    body::Bytes,
    extract::{FromRequest, FromRequestParts, Path, Query, Request},
    http::request::Parts,
};
use serde::de::DeserializeOwned;

use crate::server::error::AppError;

/// JSON request body. An empty body deserializes as `{}`.
///
/// The `Content-Type` header is not inspected. Unknown fields are rejected when the
/// target type uses `#[serde(deny_unknown_fields)]`.
pub struct Payload<T>(pub T);

impl<S, T> FromRequest<S> for Payload<T>
where
    S: Send + Sync,
    T: DeserializeOwned,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let bytes = Bytes::from_request(req, state)
            .await
            .map_err(|e| AppError::BadRequest(e.body_text()))?;

        let body: &[u8] = if bytes.iter().all(u8::is_ascii_whitespace) {
            b"{}"
        } else {
            &bytes[..]
        };

        serde_json::from_slice(body)
            .map(Payload)
            .map_err(|e| AppError::BadRequest(format!("Invalid request body: {}", e)))
    }
}

/// Query string extractor.
pub struct QueryParams<T>(pub T);

impl<S, T> FromRequestParts<S> for QueryParams<T>
where
    S: Send + Sync,
    T: DeserializeOwned,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        Query::<T>::from_request_parts(parts, state)
            .await
            .map(|Query(value)| QueryParams(value))
            .map_err(|e| AppError::BadRequest(e.body_text()))
    }
}

/// Path parameter extractor.
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
            .map(|Path(value)| PathParam(value))
            .map_err(|e| AppError::BadRequest(e.body_text()))
    }
}
