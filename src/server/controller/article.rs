use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};

use crate::{
    model::{
        api::ErrorDto,
        article::{ArticleQueryDto, PaginatedArticlesDto, PatchVotesDto, SingleArticleDto},
    },
    server::{
        controller::extract::{PathParam, Payload, QueryParams},
        error::AppError,
        model::article::ListArticlesParams,
        service::article::ArticleService,
        state::AppState,
        util::parse::parse_id,
    },
};

/// Tag for grouping article endpoints in OpenAPI documentation
pub static ARTICLE_TAG: &str = "article";

/// Lists articles with filtering, sorting and pagination.
///
/// Articles are returned without their body. `total_count` counts every article matching
/// the `author` and `topic` filters regardless of the page requested.
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `query` - Raw `sort_by`, `order`, `author`, `topic`, `limit` and `p` parameters
///
/// # Returns
/// - `200 OK` - Requested page of articles with the filtered total
/// - `400 Bad Request` - Invalid sort column, order, limit or page
/// - `404 Not Found` - `author` or `topic` filter matched no articles
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/articles",
    tag = ARTICLE_TAG,
    params(ArticleQueryDto),
    responses(
        (status = 200, description = "Successfully retrieved articles", body = PaginatedArticlesDto),
        (status = 400, description = "Invalid query parameter", body = ErrorDto),
        (status = 404, description = "No articles match the filters", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_articles(
    State(state): State<AppState>,
    QueryParams(query): QueryParams<ArticleQueryDto>,
) -> Result<impl IntoResponse, AppError> {
    let params = ListArticlesParams::from_dto(query)?;

    let service = ArticleService::new(&state.db);

    let page = service.get_paginated(params).await?;

    Ok((StatusCode::OK, Json(page.into_dto())))
}

/// Gets a single article with its body and comment count.
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `article_id` - Raw article ID path segment
///
/// # Returns
/// - `200 OK` - The article
/// - `400 Bad Request` - Article ID is not an integer
/// - `404 Not Found` - No article with this ID
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/articles/{article_id}",
    tag = ARTICLE_TAG,
    params(
        ("article_id" = i32, Path, description = "Article ID")
    ),
    responses(
        (status = 200, description = "Successfully retrieved article", body = SingleArticleDto),
        (status = 400, description = "Invalid article ID", body = ErrorDto),
        (status = 404, description = "Article not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_article(
    State(state): State<AppState>,
    PathParam(article_id): PathParam<String>,
) -> Result<impl IntoResponse, AppError> {
    let article_id = parse_id("article_id", &article_id)?;

    let service = ArticleService::new(&state.db);

    let article = service
        .get_by_id(article_id)
        .await?
        .ok_or_else(|| AppError::NotFound("Article not found".to_string()))?;

    Ok((
        StatusCode::OK,
        Json(SingleArticleDto {
            article: article.into_dto(),
        }),
    ))
}

/// Adds a signed increment to an article's votes.
///
/// The body may only contain `inc_votes`. An empty body or a missing `inc_votes` returns
/// the article unchanged.
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `article_id` - Raw article ID path segment
/// - `payload` - Vote increment
///
/// # Returns
/// - `200 OK` - The article after the update
/// - `400 Bad Request` - Invalid article ID, bad body, or a total that would overflow
/// - `404 Not Found` - No article with this ID
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    patch,
    path = "/api/articles/{article_id}",
    tag = ARTICLE_TAG,
    params(
        ("article_id" = i32, Path, description = "Article ID")
    ),
    request_body = PatchVotesDto,
    responses(
        (status = 200, description = "Successfully updated article votes", body = SingleArticleDto),
        (status = 400, description = "Invalid article ID or request body", body = ErrorDto),
        (status = 404, description = "Article not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn patch_article(
    State(state): State<AppState>,
    PathParam(article_id): PathParam<String>,
    Payload(payload): Payload<PatchVotesDto>,
) -> Result<impl IntoResponse, AppError> {
    let article_id = parse_id("article_id", &article_id)?;

    let service = ArticleService::new(&state.db);

    let article = service
        .update_votes(article_id, payload.inc_votes)
        .await?
        .ok_or_else(|| AppError::NotFound("Article not found".to_string()))?;

    Ok((
        StatusCode::OK,
        Json(SingleArticleDto {
            article: article.into_dto(),
        }),
    ))
}
