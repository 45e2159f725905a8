//! Service layer for business logic.
//!
//! Services sit between the controllers and the repositories. They apply the rules that
//! are not plain persistence: "not found" decisions, foreign key classification on
//! writes and no-op vote updates. Services return domain models and `AppError`.

pub mod article;
pub mod comment;
pub mod topic;
pub mod user;

#[cfg(test)]
mod test;
