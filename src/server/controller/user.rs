use axum::{
    extract::State,
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::ErrorDto,
        user::{SingleUserDto, UsersDto},
    },
    server::{
        controller::extract::PathParam, error::AppError, service::user::UserService,
        state::AppState,
    },
};

/// Tag for grouping user endpoints in OpenAPI documentation
pub static USER_TAG: &str = "user";

/// Lists all users.
///
/// # Returns
/// - `200 OK` - Every user
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/users",
    tag = USER_TAG,
    responses(
        (status = 200, description = "Successfully retrieved users", body = UsersDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_users(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let service = UserService::new(&state.db);

    let users = service.get_all().await?;

    Ok((
        StatusCode::OK,
        Json(UsersDto {
            users: users.into_iter().map(|u| u.into_dto()).collect(),
        }),
    ))
}

/// Gets a single user by username.
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `username` - Username to look up
///
/// # Returns
/// - `200 OK` - The user
/// - `404 Not Found` - No user with this username
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/users/{username}",
    tag = USER_TAG,
    params(
        ("username" = String, Path, description = "Username")
    ),
    responses(
        (status = 200, description = "Successfully retrieved user", body = SingleUserDto),
        (status = 404, description = "User not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_user(
    State(state): State<AppState>,
    PathParam(username): PathParam<String>,
) -> Result<impl IntoResponse, AppError> {
    let service = UserService::new(&state.db);

    let user = service
        .get_by_username(&username)
        .await?
        .ok_or_else(|| AppError::NotFound("User not found".to_string()))?;

    Ok((StatusCode::OK, Json(SingleUserDto { user: user.into_dto() })))
}
