//! Error types and HTTP response handling.
//!
//! `AppError` is the single error type returned by services and controllers. It wraps
//! infrastructure failures via `#[from]` and carries the client-facing outcomes of request
//! validation. Every variant renders as one `{ "msg": ... }` JSON body.

pub mod config;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use sea_orm::{DbErr, SqlErr};
use thiserror::Error;

use crate::{model::api::ErrorDto, server::error::config::ConfigError};

/// Top-level application error type.
///
/// Infrastructure variants (`ConfigErr`, `DbErr`, `IoErr`) always surface as
/// 500 Internal Server Error with details kept in the server log. The remaining
/// variants map one-to-one onto client error statuses.
#[derive(Error, Debug)]
pub enum AppError {
    /// Configuration error during startup or environment variable loading.
    #[error(transparent)]
    ConfigErr(#[from] ConfigError),

    /// Database operation error from SeaORM.
    #[error(transparent)]
    DbErr(#[from] DbErr),

    /// Socket or listener failure while serving.
    #[error(transparent)]
    IoErr(#[from] std::io::Error),

    /// Resource not found error.
    ///
    /// Results in 404 Not Found with the provided message.
    #[error("{0}")]
    NotFound(String),

    /// Invalid request error.
    ///
    /// Results in 400 Bad Request with the provided message. Raised for malformed path
    /// identifiers, invalid query parameters and rejected request bodies.
    #[error("{0}")]
    BadRequest(String),

    /// Well-formed request referencing data that does not exist.
    ///
    /// Results in 422 Unprocessable Entity. Raised when a write violates a foreign key.
    #[error("{0}")]
    UnprocessableEntity(String),

    /// Known route requested with an unsupported HTTP method.
    #[error("Method not allowed")]
    MethodNotAllowed,

    /// Internal server error with custom message.
    ///
    /// Results in 500 Internal Server Error. The message is logged but a generic message
    /// is returned to the client.
    #[error("{0}")]
    InternalError(String),
}

impl AppError {
    /// Classifies a failed insert or update.
    ///
    /// Foreign key violations mean the request referenced a parent row that does not
    /// exist, which is a client error. Everything else stays a database error.
    ///
    /// # Arguments
    /// - `err` - Error returned by the write
    /// - `msg` - Client message used when the write violated a foreign key
    ///
    /// # Returns
    /// - `AppError::UnprocessableEntity` - Foreign key constraint violated
    /// - `AppError::DbErr` - Any other database failure
    pub fn from_write_err(err: DbErr, msg: &str) -> Self {
        match err.sql_err() {
            Some(SqlErr::ForeignKeyConstraintViolation(detail)) => {
                tracing::debug!("Foreign key violation: {}", detail);
                Self::UnprocessableEntity(msg.to_string())
            }
            _ => Self::DbErr(err),
        }
    }
}

/// Converts application errors into HTTP responses.
///
/// # Returns
/// - 400 Bad Request - For `BadRequest`
/// - 404 Not Found - For `NotFound`
/// - 405 Method Not Allowed - For `MethodNotAllowed`
/// - 422 Unprocessable Entity - For `UnprocessableEntity`
/// - 500 Internal Server Error - For all infrastructure errors
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            Self::NotFound(msg) => (StatusCode::NOT_FOUND, Json(ErrorDto { msg })).into_response(),
            Self::BadRequest(msg) => {
                tracing::debug!("Rejected request: {}", msg);
                (StatusCode::BAD_REQUEST, Json(ErrorDto { msg })).into_response()
            }
            Self::UnprocessableEntity(msg) => {
                (StatusCode::UNPROCESSABLE_ENTITY, Json(ErrorDto { msg })).into_response()
            }
            Self::MethodNotAllowed => (
                StatusCode::METHOD_NOT_ALLOWED,
                Json(ErrorDto {
                    msg: "Method not allowed".to_string(),
                }),
            )
                .into_response(),
            Self::InternalError(msg) => InternalServerError(msg).into_response(),
            err => InternalServerError(err).into_response(),
        }
    }
}

/// Wrapper type for converting any displayable error into a 500 Internal Server Error response.
///
/// Logs the full error and returns a generic message so database details never reach
/// the client.
pub struct InternalServerError<E>(pub E);

impl<E: std::fmt::Display> IntoResponse for InternalServerError<E> {
    fn into_response(self) -> Response {
        tracing::error!("{}", self.0);

        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorDto {
                msg: "Internal server error".to_string(),
            }),
        )
            .into_response()
    }
}
