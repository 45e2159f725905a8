use crate::server::{
    data::article::ArticleRepository,
    model::{
        article::{ArticleSortKey, ListArticlesParams},
        query::{Pagination, SortOrder},
    },
};
use sea_orm::{DbErr, EntityTrait};
use test_utils::{builder::TestBuilder, factory};

mod exists;
mod get_by_id;
mod get_paginated;
mod increment_votes;

fn ids(articles: &[crate::server::model::article::Article]) -> Vec<i32> {
    articles.iter().map(|a| a.article_id).collect()
}
