//! Application state shared across all request handlers.
//!
//! The only shared resource is the database connection pool. It is created once in
//! `main` and cloned into every handler through Axum's state extraction.

use sea_orm::DatabaseConnection;

#[derive(Clone)]
pub struct AppState {
    /// Database connection pool. Clones share the same pool.
    pub db: DatabaseConnection,
}

impl AppState {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}
