//! Article domain models and listing parameters.

use chrono::{DateTime, Utc};
use sea_orm::FromQueryResult;

use crate::{
    model::article::{ArticleDto, ArticleQueryDto, ArticleSummaryDto, PaginatedArticlesDto},
    server::{
        error::AppError,
        model::query::{parse_sort_key, Pagination, SortOrder},
    },
};

/// Article row joined with the number of comments that reference it.
///
/// Produced by the repository's aggregate query; `comment_count` is computed per
/// query and never stored.
#[derive(Debug, Clone, FromQueryResult)]
pub struct ArticleWithCommentCount {
    pub article_id: i32,
    pub title: String,
    pub body: String,
    pub topic: String,
    pub author: String,
    pub created_at: DateTime<Utc>,
    pub votes: i64,
    pub comment_count: i64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Article {
    pub article_id: i32,
    pub title: String,
    pub body: String,
    pub topic: String,
    pub author: String,
    pub created_at: DateTime<Utc>,
    pub votes: i64,
    pub comment_count: i64,
}

impl Article {
    pub fn from_row(row: ArticleWithCommentCount) -> Self {
        Self {
            article_id: row.article_id,
            title: row.title,
            body: row.body,
            topic: row.topic,
            author: row.author,
            created_at: row.created_at,
            votes: row.votes,
            comment_count: row.comment_count,
        }
    }

    /// Converts to the full representation returned by single-article endpoints.
    pub fn into_dto(self) -> ArticleDto {
        ArticleDto {
            author: self.author,
            title: self.title,
            article_id: self.article_id,
            body: self.body,
            topic: self.topic,
            created_at: self.created_at,
            votes: self.votes,
            comment_count: self.comment_count,
        }
    }

    /// Converts to the listing representation, which omits `body`.
    pub fn into_summary_dto(self) -> ArticleSummaryDto {
        ArticleSummaryDto {
            author: self.author,
            title: self.title,
            article_id: self.article_id,
            topic: self.topic,
            created_at: self.created_at,
            votes: self.votes,
            comment_count: self.comment_count,
        }
    }
}

/// One page of articles plus the size of the filtered collection.
#[derive(Debug, Clone)]
pub struct PaginatedArticles {
    pub total_count: u64,
    pub articles: Vec<Article>,
}

impl PaginatedArticles {
    pub fn into_dto(self) -> PaginatedArticlesDto {
        PaginatedArticlesDto {
            total_count: self.total_count,
            articles: self
                .articles
                .into_iter()
                .map(Article::into_summary_dto)
                .collect(),
        }
    }
}

/// Columns the article listing can be sorted by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ArticleSortKey {
    Author,
    Title,
    ArticleId,
    Topic,
    #[default]
    CreatedAt,
    Votes,
    CommentCount,
}

impl ArticleSortKey {
    const CHOICES: [(&'static str, Self); 7] = [
        ("author", Self::Author),
        ("title", Self::Title),
        ("article_id", Self::ArticleId),
        ("topic", Self::Topic),
        ("created_at", Self::CreatedAt),
        ("votes", Self::Votes),
        ("comment_count", Self::CommentCount),
    ];

    pub fn parse(value: Option<&str>) -> Result<Self, AppError> {
        parse_sort_key(value, &Self::CHOICES, Self::default())
    }
}

/// Validated parameters for listing articles.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ListArticlesParams {
    pub sort_by: ArticleSortKey,
    pub order: SortOrder,
    /// Exact-match author filter.
    pub author: Option<String>,
    /// Exact-match topic filter.
    pub topic: Option<String>,
    pub pagination: Pagination,
}

impl ListArticlesParams {
    /// Validates the raw query string of `GET /api/articles`.
    ///
    /// # Returns
    /// - `Ok(ListArticlesParams)` - Every present parameter is valid
    /// - `Err(AppError::BadRequest)` - Unknown `sort_by`, `order` other than `asc`/`desc`,
    ///   or a non-positive `limit`/`p`
    pub fn from_dto(dto: ArticleQueryDto) -> Result<Self, AppError> {
        Ok(Self {
            sort_by: ArticleSortKey::parse(dto.sort_by.as_deref())?,
            order: SortOrder::parse(dto.order.as_deref())?,
            author: dto.author,
            topic: dto.topic,
            pagination: Pagination::parse(dto.limit.as_deref(), dto.p.as_deref())?,
        })
    }

    pub fn has_filters(&self) -> bool {
        self.author.is_some() || self.topic.is_some()
    }
}
