use crate::server::error::AppError;

/// Largest value accepted for `limit` and `p`, the range SQLite can bind.
const MAX_QUERY_NUMBER: u64 = i64::MAX as u64;

/// Parses an integer path identifier such as `article_id` or `comment_id`.
///
/// # Arguments
/// - `name` - Parameter name used in the error message
/// - `value` - Raw path segment
///
/// # Returns
/// - `Ok(i32)` - Parsed identifier
/// - `Err(AppError::BadRequest)` - Value is not an integer
pub fn parse_id(name: &str, value: &str) -> Result<i32, AppError> {
    value
        .parse::<i32>()
        .map_err(|_| AppError::BadRequest(format!("Invalid {}: '{}' is not an integer", name, value)))
}

/// Parses a strictly positive integer query parameter such as `limit` or `p`.
///
/// # Arguments
/// - `name` - Parameter name used in the error message
/// - `value` - Raw query value
///
/// # Returns
/// - `Ok(u64)` - Parsed value, at least 1
/// - `Err(AppError::BadRequest)` - Value is non-numeric, zero, negative or out of range
pub fn parse_positive(name: &str, value: &str) -> Result<u64, AppError> {
    match value.parse::<u64>() {
        Ok(n) if (1..=MAX_QUERY_NUMBER).contains(&n) => Ok(n),
        _ => Err(AppError::BadRequest(format!(
            "Invalid {}: '{}' is not a positive integer",
            name, value
        ))),
    }
}
