use crate::server::{
    data::comment::CommentRepository,
    model::{
        comment::{CommentSortKey, CreateCommentParams, ListCommentsParams},
        query::{Pagination, SortOrder},
    },
};
use sea_orm::{DbErr, EntityTrait, PaginatorTrait, SqlErr};
use test_utils::{builder::TestBuilder, factory};

mod create;
mod delete;
mod get_by_article_id;
mod increment_votes;
