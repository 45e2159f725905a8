//! Article factory for creating test article entities.
//!
//! Articles reference a topic and an author, so both must exist before
//! `build()` is called. Use `helpers::create_article_with_dependencies` to
//! create all three at once.

use crate::factory::helpers::next_id;
use chrono::{DateTime, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test articles with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// let article = ArticleFactory::new(&db, "mitch", "butter_bridge")
///     .title("Living in the shadow of a great man")
///     .votes(100)
///     .build()
///     .await?;
/// ```
pub struct ArticleFactory<'a> {
    db: &'a DatabaseConnection,
    title: String,
    body: String,
    topic: String,
    author: String,
    created_at: DateTime<Utc>,
    votes: i64,
}

impl<'a> ArticleFactory<'a> {
    /// Creates a new ArticleFactory with default values.
    ///
    /// Defaults:
    /// - title: `"Article {id}"`
    /// - body: `"Body of article {id}"`
    /// - created_at: now
    /// - votes: `0`
    pub fn new(db: &'a DatabaseConnection, topic: &str, author: &str) -> Self {
        let id = next_id();
        Self {
            db,
            title: format!("Article {}", id),
            body: format!("Body of article {}", id),
            topic: topic.to_string(),
            author: author.to_string(),
            created_at: Utc::now(),
            votes: 0,
        }
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
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

    /// Builds and inserts the article entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::article::Model)` - Created article with generated `article_id`
    /// - `Err(DbErr)` - Database error during insert (e.g. unknown topic or author)
    pub async fn build(self) -> Result<entity::article::Model, DbErr> {
        entity::article::ActiveModel {
            title: ActiveValue::Set(self.title),
            body: ActiveValue::Set(self.body),
            topic: ActiveValue::Set(self.topic),
            author: ActiveValue::Set(self.author),
            created_at: ActiveValue::Set(self.created_at),
            votes: ActiveValue::Set(self.votes),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates an article with default values for the given topic and author.
pub async fn create_article(
    db: &DatabaseConnection,
    topic: &str,
    author: &str,
) -> Result<entity::article::Model, DbErr> {
    ArticleFactory::new(db, topic, author).build().await
}
