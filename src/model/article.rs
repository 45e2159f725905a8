use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

/// Full article including its body, returned by single-article endpoints.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ArticleDto {
    pub author: String,
    pub title: String,
    pub article_id: i32,
    pub body: String,
    pub topic: String,
    pub created_at: DateTime<Utc>,
    pub votes: i64,
    pub comment_count: i64,
}

/// Article projection used in listings; identical to `ArticleDto` without `body`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ArticleSummaryDto {
    pub author: String,
    pub title: String,
    pub article_id: i32,
    pub topic: String,
    pub created_at: DateTime<Utc>,
    pub votes: i64,
    pub comment_count: i64,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct PaginatedArticlesDto {
    /// Number of articles matching the `author`/`topic` filters across all pages.
    pub total_count: u64,
    pub articles: Vec<ArticleSummaryDto>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct SingleArticleDto {
    pub article: ArticleDto,
}

/// Raw query string of `GET /api/articles`.
///
/// Every field is kept as a string so malformed values reach validation instead of
/// being rejected by the extractor.
#[derive(Debug, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ArticleQueryDto {
    /// Column to sort by (default `created_at`)
    pub sort_by: Option<String>,
    /// `asc` or `desc` (default `desc`)
    pub order: Option<String>,
    /// Only articles written by this username
    pub author: Option<String>,
    /// Only articles with this topic slug
    pub topic: Option<String>,
    /// Page size (default 10)
    pub limit: Option<String>,
    /// 1-indexed page number (default 1)
    pub p: Option<String>,
}

/// Body of `PATCH /api/articles/{article_id}` and `PATCH /api/comments/{comment_id}`.
#[derive(Debug, Default, Deserialize, ToSchema)]
#[serde(deny_unknown_fields)]
pub struct PatchVotesDto {
    /// Signed amount added to `votes`; omit to leave the record unchanged.
    pub inc_votes: Option<i32>,
}
