//! Wire-level DTOs shared by every endpoint.
//!
//! These types define the exact JSON shapes sent and received over HTTP. Server-side
//! domain models convert into them at the controller boundary.

pub mod api;
pub mod article;
pub mod comment;
pub mod topic;
pub mod user;
