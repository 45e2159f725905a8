//! Server-side domain models and parameter types.
//!
//! Domain models are converted from entity models at the repository boundary and
//! transformed to DTOs at the controller boundary. Parameter types hold request input
//! that has already been validated, so repositories never see raw query strings.

pub mod article;
pub mod comment;
pub mod query;
pub mod topic;
pub mod user;
