//! Database repository layer.
//!
//! Repositories wrap a borrowed `DatabaseConnection`, run SeaORM queries and return
//! domain models. They report failures as raw `DbErr`; classifying those failures into
//! client errors is left to the service layer.

pub mod article;
pub mod comment;
pub mod topic;
pub mod user;

use sea_orm::{ColumnTrait, Condition};

/// Limits an UPDATE to rows whose `votes` total can absorb `inc_votes` without leaving
/// the `i64` range.
pub(crate) fn votes_headroom<C: ColumnTrait>(votes: C, inc_votes: i32) -> Condition {
    let inc_votes = i64::from(inc_votes);
    let bound = if inc_votes >= 0 {
        votes.lte(i64::MAX - inc_votes)
    } else {
        votes.gte(i64::MIN - inc_votes)
    };

    Condition::all().add(bound)
}

#[cfg(test)]
mod test;
