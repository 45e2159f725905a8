//! News API backend.
//!
//! # Architecture
//!
//! The server follows a layered architecture:
//!
//! - **Controller Layer** (`controller/`) - HTTP request handlers and DTO conversion
//! - **Service Layer** (`service/`) - Not-found decisions and write error classification
//! - **Data Layer** (`data/`) - SeaORM queries and entity-to-domain model conversion
//! - **Model Layer** (`model/`) - Domain models and validated parameter types
//! - **Error Layer** (`error/`) - Application error types and HTTP response mapping
//!
//! # Infrastructure
//!
//! - **Configuration** (`config`) - Environment-based application configuration
//! - **State** (`state`) - Shared database connection pool
//! - **Startup** (`startup`) - Tracing, database connection and shutdown signal
//! - **Router** (`router`) - Axum route table and OpenAPI document
//!
//! # Request Flow
//!
//! 1. **Router** matches the path and method, or answers 404/405
//! 2. **Controller** parses path, query and body into validated params
//! 3. **Service** runs the operation through one or more repositories
//! 4. **Data** queries the database and returns domain models
//! 5. **Controller** converts the domain model to a DTO and responds

pub mod config;
pub mod controller;
pub mod data;
pub mod error;
pub mod model;
pub mod router;
pub mod service;
pub mod startup;
pub mod state;
pub mod util;
