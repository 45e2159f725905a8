use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};

use crate::{
    model::{api::ErrorDto, topic::TopicsDto},
    server::{error::AppError, service::topic::TopicService, state::AppState},
};

/// Tag for grouping topic endpoints in OpenAPI documentation
pub static TOPIC_TAG: &str = "topic";

/// Lists all topics.
///
/// # Returns
/// - `200 OK` - Every topic with its slug and description
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/topics",
    tag = TOPIC_TAG,
    responses(
        (status = 200, description = "Successfully retrieved topics", body = TopicsDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_topics(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let service = TopicService::new(&state.db);

    let topics = service.get_all().await?;

    Ok((
        StatusCode::OK,
        Json(TopicsDto {
            topics: topics.into_iter().map(|t| t.into_dto()).collect(),
        }),
    ))
}
