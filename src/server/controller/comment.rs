use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};

use crate::{
    model::{
        api::ErrorDto,
        article::PatchVotesDto,
        comment::{CommentQueryDto, CommentsDto, PostCommentDto, SingleCommentDto},
    },
    server::{
        controller::extract::{PathParam, Payload, QueryParams},
        error::AppError,
        model::comment::{CreateCommentParams, ListCommentsParams},
        service::comment::CommentService,
        state::AppState,
        util::parse::parse_id,
    },
};

/// Tag for grouping comment endpoints in OpenAPI documentation
pub static COMMENT_TAG: &str = "comment";

/// Lists the comments of an article with sorting and pagination.
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `article_id` - Raw article ID path segment
/// - `query` - Raw `sort_by`, `order`, `limit` and `p` parameters
///
/// # Returns
/// - `200 OK` - Requested page of comments, empty if the article has none
/// - `400 Bad Request` - Invalid article ID or query parameter
/// - `404 Not Found` - No article with this ID
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/articles/{article_id}/comments",
    tag = COMMENT_TAG,
    params(
        ("article_id" = i32, Path, description = "Article ID"),
        CommentQueryDto
    ),
    responses(
        (status = 200, description = "Successfully retrieved comments", body = CommentsDto),
        (status = 400, description = "Invalid article ID or query parameter", body = ErrorDto),
        (status = 404, description = "Article not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_article_comments(
    State(state): State<AppState>,
    PathParam(article_id): PathParam<String>,
    QueryParams(query): QueryParams<CommentQueryDto>,
) -> Result<impl IntoResponse, AppError> {
    let article_id = parse_id("article_id", &article_id)?;
    let params = ListCommentsParams::from_dto(query)?;

    let service = CommentService::new(&state.db);

    let comments = service.get_by_article_id(article_id, params).await?;

    Ok((
        StatusCode::OK,
        Json(CommentsDto {
            comments: comments.into_iter().map(|c| c.into_dto()).collect(),
        }),
    ))
}

/// Posts a comment on an article.
///
/// The body must contain a non-empty `username` and `body` and nothing else.
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `article_id` - Raw article ID path segment
/// - `payload` - Comment author and text
///
/// # Returns
/// - `201 Created` - The new comment
/// - `400 Bad Request` - Invalid article ID, missing field or unexpected field
/// - `422 Unprocessable Entity` - Article or user does not exist
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/api/articles/{article_id}/comments",
    tag = COMMENT_TAG,
    params(
        ("article_id" = i32, Path, description = "Article ID")
    ),
    request_body = PostCommentDto,
    responses(
        (status = 201, description = "Successfully created comment", body = SingleCommentDto),
        (status = 400, description = "Invalid article ID or request body", body = ErrorDto),
        (status = 422, description = "Article or user does not exist", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn post_comment(
    State(state): State<AppState>,
    PathParam(article_id): PathParam<String>,
    Payload(payload): Payload<PostCommentDto>,
) -> Result<impl IntoResponse, AppError> {
    let article_id = parse_id("article_id", &article_id)?;

    // Convert DTO to server model
    let params = CreateCommentParams::from_dto(article_id, payload)?;

    let service = CommentService::new(&state.db);

    let comment = service.create(params).await?;

    Ok((
        StatusCode::CREATED,
        Json(SingleCommentDto {
            comment: comment.into_dto(),
        }),
    ))
}

/// Adds a signed increment to a comment's votes.
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `comment_id` - Raw comment ID path segment
/// - `payload` - Vote increment
///
/// # Returns
/// - `200 OK` - The comment after the update
/// - `400 Bad Request` - Invalid comment ID, bad body, or a total that would overflow
/// - `404 Not Found` - No comment with this ID
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    patch,
    path = "/api/comments/{comment_id}",
    tag = COMMENT_TAG,
    params(
        ("comment_id" = i32, Path, description = "Comment ID")
    ),
    request_body = PatchVotesDto,
    responses(
        (status = 200, description = "Successfully updated comment votes", body = SingleCommentDto),
        (status = 400, description = "Invalid comment ID or request body", body = ErrorDto),
        (status = 404, description = "Comment not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn patch_comment(
    State(state): State<AppState>,
    PathParam(comment_id): PathParam<String>,
    Payload(payload): Payload<PatchVotesDto>,
) -> Result<impl IntoResponse, AppError> {
    let comment_id = parse_id("comment_id", &comment_id)?;

    let service = CommentService::new(&state.db);

    let comment = service
        .update_votes(comment_id, payload.inc_votes)
        .await?
        .ok_or_else(|| AppError::NotFound("Comment not found".to_string()))?;

    Ok((
        StatusCode::OK,
        Json(SingleCommentDto {
            comment: comment.into_dto(),
        }),
    ))
}

/// Deletes a comment.
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `comment_id` - Raw comment ID path segment
///
/// # Returns
/// - `204 No Content` - Comment deleted
/// - `400 Bad Request` - Comment ID is not an integer
/// - `404 Not Found` - No comment with this ID
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    delete,
    path = "/api/comments/{comment_id}",
    tag = COMMENT_TAG,
    params(
        ("comment_id" = i32, Path, description = "Comment ID")
    ),
    responses(
        (status = 204, description = "Successfully deleted comment"),
        (status = 400, description = "Invalid comment ID", body = ErrorDto),
        (status = 404, description = "Comment not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_comment(
    State(state): State<AppState>,
    PathParam(comment_id): PathParam<String>,
) -> Result<impl IntoResponse, AppError> {
    let comment_id = parse_id("comment_id", &comment_id)?;

    let service = CommentService::new(&state.db);

    service.delete(comment_id).await?;

    Ok(StatusCode::NO_CONTENT)
}
