//! Comment factory for creating test comment entities.

use crate::factory::helpers::next_id;
use chrono::{DateTime, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test comments with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// let comment = CommentFactory::new(&db, article.article_id, "butter_bridge")
///     .body("Oh, I've got compassion running out of my nose, pal!")
///     .votes(16)
///     .build()
///     .await?;
/// ```
pub struct CommentFactory<'a> {
    db: &'a DatabaseConnection,
    article_id: i32,
    author: String,
    body: String,
    created_at: DateTime<Utc>,
    votes: i64,
}

impl<'a> CommentFactory<'a> {
    /// Creates a new CommentFactory with default values.
    ///
    /// Defaults:
    /// - body: `"Comment {id}"`
    /// - created_at: now
    /// - votes: `0`
    pub fn new(db: &'a DatabaseConnection, article_id: i32, author: &str) -> Self {
        let id = next_id();
        Self {
            db,
            article_id,
            author: author.to_string(),
            body: format!("Comment {}", id),
            created_at: Utc::now(),
            votes: 0,
        }
    }

    pub fn body(mut self, body: impl Into<String>) -> Self {
        self.body = body.into();
        self
    }

    pub fn created_at(mut self, created_at: DateTime<Utc>) -> Self {
        self.created_at = created_at;
        self
    }

    pub fn votes(mut self, votes: i64) -> Self {
        self.votes = votes;
        self
    }

    /// Builds and inserts the comment entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::comment::Model)` - Created comment with generated `comment_id`
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::comment::Model, DbErr> {
        entity::comment::ActiveModel {
            article_id: ActiveValue::Set(self.article_id),
            author: ActiveValue::Set(self.author),
            body: ActiveValue::Set(self.body),
            created_at: ActiveValue::Set(self.created_at),
            votes: ActiveValue::Set(self.votes),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a comment with default values on the given article.
pub async fn create_comment(
    db: &DatabaseConnection,
    article_id: i32,
    author: &str,
) -> Result<entity::comment::Model, DbErr> {
    CommentFactory::new(db, article_id, author).build().await
}
