//! Test fixtures providing reusable test data without database insertion.
//!
//! This module contains fixture functions that create in-memory entity models
//! for use in unit tests, such as conversions from entity models into domain
//! models and DTOs. Unlike factories, fixtures do NOT insert data into the database.
//!
//! # Example
//!
//! ```rust,ignore
//! use test_utils::fixture;
//!
//! let article = fixture::article::entity();
//! assert_eq!(article.article_id, 1);
//! ```

pub mod article;
pub mod comment;

pub use article::entity as article_entity;
pub use comment::entity as comment_entity;
