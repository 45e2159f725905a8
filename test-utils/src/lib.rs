//! Newsboard Test Utils
//!
//! Provides shared testing utilities for building integration and unit tests for the newsboard
//! application. This crate offers a builder pattern for creating test contexts with in-memory
//! SQLite databases and customizable table schemas.
//!
//! # Overview
//!
//! The test utilities consist of four main components:
//! - **TestBuilder**: Fluent builder for configuring test environments
//! - **TestContext**: Test environment containing the database connection
//! - **factory**: Builders for inserting topics, users, articles and comments, plus the
//!   canonical seed dataset used by scenario tests
//! - **fixture**: In-memory entity models for conversion tests
//!
//! # Usage
//!
//! Use `TestBuilder` to create a test context with the required database tables:
//!
//! ```rust,ignore
//! use test_utils::{builder::TestBuilder, factory};
//!
//! #[tokio::test]
//! async fn test_article_operations() -> Result<(), TestError> {
//!     let test = TestBuilder::new()
//!         .with_news_tables()
//!         .build()
//!         .await?;
//!
//!     let db = test.db.as_ref().unwrap();
//!     factory::seed_news_data(db).await?;
//!     // Perform database operations...
//!
//!     Ok(())
//! }
//! ```

pub mod builder;
pub mod context;
pub mod error;
pub mod factory;
pub mod fixture;
