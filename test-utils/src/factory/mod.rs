//! Factory methods for creating test data.
//!
//! This module provides factory methods for creating test entities with sensible defaults,
//! reducing boilerplate in tests. Each entity has its own factory module with both a
//! `Factory` struct for customization and a `create_*` convenience function for quick
//! default creation.
//!
//! # Basic Usage
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! // Create with defaults
//! let topic = factory::topic::create_topic(&db).await?;
//! let user = factory::user::create_user(&db).await?;
//!
//! // Create with all dependencies
//! let (topic, user, article) = factory::helpers::create_article_with_dependencies(&db).await?;
//! ```
//!
//! # Customization
//!
//! ```rust,ignore
//! let article = factory::article::ArticleFactory::new(&db, &topic.slug, &user.username)
//!     .title("Custom title")
//!     .votes(42)
//!     .build()
//!     .await?;
//! ```

pub mod article;
pub mod comment;
pub mod helpers;
pub mod seed;
pub mod topic;
pub mod user;

// Re-export commonly used factory functions for concise usage
pub use article::create_article;
pub use comment::create_comment;
pub use seed::seed_news_data;
pub use topic::create_topic;
pub use user::create_user;
