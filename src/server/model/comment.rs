//! Comment domain models and parameters.

use chrono::{DateTime, Utc};

use crate::{
    model::comment::{CommentDto, CommentQueryDto, PostCommentDto},
    server::{
        error::AppError,
        model::query::{parse_sort_key, Pagination, SortOrder},
    },
};

#[derive(Debug, Clone, PartialEq)]
pub struct Comment {
    pub comment_id: i32,
    pub article_id: i32,
    pub author: String,
    pub body: String,
    pub votes: i64,
    pub created_at: DateTime<Utc>,
}

impl Comment {
    pub fn from_entity(entity: entity::comment::Model) -> Self {
        Self {
            comment_id: entity.comment_id,
            article_id: entity.article_id,
            author: entity.author,
            body: entity.body,
            votes: entity.votes,
            created_at: entity.created_at,
        }
    }

    pub fn into_dto(self) -> CommentDto {
        CommentDto {
            comment_id: self.comment_id,
            author: self.author,
            body: self.body,
            votes: self.votes,
            created_at: self.created_at,
        }
    }
}

/// Columns the comment listing can be sorted by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CommentSortKey {
    CommentId,
    Votes,
    #[default]
    CreatedAt,
    Author,
    Body,
}

impl CommentSortKey {
    const CHOICES: [(&'static str, Self); 5] = [
        ("comment_id", Self::CommentId),
        ("votes", Self::Votes),
        ("created_at", Self::CreatedAt),
        ("author", Self::Author),
        ("body", Self::Body),
    ];

    pub fn parse(value: Option<&str>) -> Result<Self, AppError> {
        parse_sort_key(value, &Self::CHOICES, Self::default())
    }
}

/// Validated parameters for listing the comments of one article.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ListCommentsParams {
    pub sort_by: CommentSortKey,
    pub order: SortOrder,
    pub pagination: Pagination,
}

impl ListCommentsParams {
    pub fn from_dto(dto: CommentQueryDto) -> Result<Self, AppError> {
        Ok(Self {
            sort_by: CommentSortKey::parse(dto.sort_by.as_deref())?,
            order: SortOrder::parse(dto.order.as_deref())?,
            pagination: Pagination::parse(dto.limit.as_deref(), dto.p.as_deref())?,
        })
    }
}

/// Validated parameters for posting a comment.
#[derive(Debug, Clone, PartialEq)]
pub struct CreateCommentParams {
    pub article_id: i32,
    pub author: String,
    pub body: String,
}

impl CreateCommentParams {
    /// Requires both `username` and `body` to be present and non-empty.
    pub fn from_dto(article_id: i32, dto: PostCommentDto) -> Result<Self, AppError> {
        let author = required_field("username", dto.username)?;
        let body = required_field("body", dto.body)?;

        Ok(Self {
            article_id,
            author,
            body,
        })
    }
}

fn required_field(name: &str, value: Option<String>) -> Result<String, AppError> {
    match value {
        Some(value) if !value.trim().is_empty() => Ok(value),
        _ => Err(AppError::BadRequest(format!(
            "Missing required field: {}",
            name
        ))),
    }
}
