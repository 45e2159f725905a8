use sea_orm::DatabaseConnection;

use crate::server::{
    data::{article::ArticleRepository, comment::CommentRepository},
    error::AppError,
    model::comment::{Comment, CreateCommentParams, ListCommentsParams},
};

pub struct CommentService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> CommentService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets one page of comments for an article.
    ///
    /// # Returns
    /// - `Ok(Vec<Comment>)` - Comments on the requested page, possibly empty
    /// - `Err(AppError::NotFound)` - Article does not exist
    pub async fn get_by_article_id(
        &self,
        article_id: i32,
        params: ListCommentsParams,
    ) -> Result<Vec<Comment>, AppError> {
        if !ArticleRepository::new(self.db).exists(article_id).await? {
            return Err(AppError::NotFound("Article not found".to_string()));
        }

        let repo = CommentRepository::new(self.db);

        Ok(repo.get_by_article_id(article_id, &params).await?)
    }

    /// Posts a new comment.
    ///
    /// The article and author are checked by the database's foreign keys rather than
    /// up front, so a missing article or user surfaces as unprocessable.
    ///
    /// # Returns
    /// - `Ok(Comment)` - Newly created comment
    /// - `Err(AppError::UnprocessableEntity)` - Article or author does not exist
    pub async fn create(&self, params: CreateCommentParams) -> Result<Comment, AppError> {
        let repo = CommentRepository::new(self.db);

        let comment = repo
            .create(params)
            .await
            .map_err(|e| AppError::from_write_err(e, "Unprocessable entity"))?;

        tracing::info!(
            "Comment {} posted on article {} by {}",
            comment.comment_id,
            comment.article_id,
            comment.author
        );

        Ok(comment)
    }

    /// Applies a vote increment and returns the refreshed comment.
    ///
    /// # Returns
    /// - `Ok(Some(Comment))` - Comment after the update
    /// - `Ok(None)` - No comment with this ID
    /// - `Err(AppError::BadRequest)` - The new total would overflow
    pub async fn update_votes(
        &self,
        comment_id: i32,
        inc_votes: Option<i32>,
    ) -> Result<Option<Comment>, AppError> {
        let repo = CommentRepository::new(self.db);

        if let Some(inc_votes) = inc_votes {
            if !repo.increment_votes(comment_id, inc_votes).await? {
                if repo.get_by_id(comment_id).await?.is_none() {
                    return Ok(None);
                }
                return Err(AppError::BadRequest(
                    "inc_votes would overflow the vote total".to_string(),
                ));
            }
        }

        Ok(repo.get_by_id(comment_id).await?)
    }

    /// Deletes a comment.
    ///
    /// # Returns
    /// - `Ok(())` - Comment removed
    /// - `Err(AppError::NotFound)` - No comment with this ID
    pub async fn delete(&self, comment_id: i32) -> Result<(), AppError> {
        let repo = CommentRepository::new(self.db);

        if !repo.delete(comment_id).await? {
            return Err(AppError::NotFound("Comment not found".to_string()));
        }

        tracing::info!("Comment {} deleted", comment_id);

        Ok(())
    }
}
