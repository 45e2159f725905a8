//! SeaORM entity models for the newsboard schema.
//!
//! Generated-style entity definitions for the four tables created by the `migration`
//! crate. Relations mirror the foreign keys so that `Schema::create_table_from_entity`
//! produces an equivalent schema for in-memory test databases.

pub mod prelude;

pub mod article;
pub mod comment;
pub mod topic;
pub mod user;
