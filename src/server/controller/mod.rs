//! HTTP request handlers.
//!
//! Controllers parse path segments, query strings and bodies into validated parameter
//! types, call the matching service, and convert domain models into DTOs. Every failure
//! leaves as an `AppError`, so clients always receive a `{ "msg": ... }` body.

pub mod api;
pub mod article;
pub mod comment;
pub mod extract;
pub mod fallback;
pub mod topic;
pub mod user;

#[cfg(test)]
mod test;
