use crate::server::error::AppError;

/// Handles every path no route matches.
pub async fn route_not_found() -> AppError {
    AppError::NotFound("Route not found".to_string())
}

/// Handles known paths requested with a method they do not support.
pub async fn method_not_allowed() -> AppError {
    AppError::MethodNotAllowed
}
