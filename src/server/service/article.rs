use sea_orm::DatabaseConnection;

use crate::server::{
    data::article::ArticleRepository,
    error::AppError,
    model::article::{Article, ListArticlesParams, PaginatedArticles},
};

pub struct ArticleService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ArticleService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets one page of articles.
    ///
    /// An `author` or `topic` filter that matches no article at all is reported as not
    /// found. Without filters, or when only the requested page is empty, the result is an
    /// empty page.
    ///
    /// # Returns
    /// - `Ok(PaginatedArticles)` - Requested page and the filtered total
    /// - `Err(AppError::NotFound)` - Filters matched no articles
    /// - `Err(AppError::DbErr)` - Database error
    pub async fn get_paginated(
        &self,
        params: ListArticlesParams,
    ) -> Result<PaginatedArticles, AppError> {
        let repo = ArticleRepository::new(self.db);

        let (articles, total_count) = repo.get_paginated(&params).await?;

        if total_count == 0 && params.has_filters() {
            return Err(AppError::NotFound("Articles not found".to_string()));
        }

        Ok(PaginatedArticles {
            total_count,
            articles,
        })
    }

    /// Gets an article by ID with its comment count
    pub async fn get_by_id(&self, article_id: i32) -> Result<Option<Article>, AppError> {
        let repo = ArticleRepository::new(self.db);

        Ok(repo.get_by_id(article_id).await?)
    }

    /// Applies a vote increment and returns the refreshed article.
    ///
    /// A missing increment leaves the article untouched and simply returns it.
    ///
    /// # Returns
    /// - `Ok(Some(Article))` - Article after the update
    /// - `Ok(None)` - No article with this ID
    /// - `Err(AppError::BadRequest)` - The new total would overflow
    pub async fn update_votes(
        &self,
        article_id: i32,
        inc_votes: Option<i32>,
    ) -> Result<Option<Article>, AppError> {
        let repo = ArticleRepository::new(self.db);

        if let Some(inc_votes) = inc_votes {
            if !repo.increment_votes(article_id, inc_votes).await? {
                if !repo.exists(article_id).await? {
                    return Ok(None);
                }
                return Err(AppError::BadRequest(
                    "inc_votes would overflow the vote total".to_string(),
                ));
            }
            tracing::debug!("Article {} votes changed by {}", article_id, inc_votes);
        }

        Ok(repo.get_by_id(article_id).await?)
    }
}
