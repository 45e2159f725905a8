use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct CommentDto {
    pub comment_id: i32,
    pub author: String,
    pub body: String,
    pub votes: i64,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct CommentsDto {
    pub comments: Vec<CommentDto>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct SingleCommentDto {
    pub comment: CommentDto,
}

/// Raw query string of `GET /api/articles/{article_id}/comments`.
#[derive(Debug, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct CommentQueryDto {
    /// Column to sort by (default `created_at`)
    pub sort_by: Option<String>,
    /// `asc` or `desc` (default `desc`)
    pub order: Option<String>,
    /// Page size (default 10)
    pub limit: Option<String>,
    /// 1-indexed page number (default 1)
    pub p: Option<String>,
}

/// Body of `POST /api/articles/{article_id}/comments`.
#[derive(Debug, Deserialize, ToSchema)]
#[serde(deny_unknown_fields)]
pub struct PostCommentDto {
    /// Username of the comment author; must be an existing user.
    pub username: Option<String>,
    pub body: Option<String>,
}
