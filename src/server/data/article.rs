use sea_orm::{
    sea_query::{Expr, ExprTrait, Func},
    ColumnTrait, DatabaseConnection, DbErr, EntityTrait, JoinType, PaginatorTrait, QueryFilter,
    QueryOrder, QuerySelect, RelationTrait, Select,
};

use crate::server::{
    data::votes_headroom,
    model::article::{Article, ArticleSortKey, ArticleWithCommentCount, ListArticlesParams},
};

pub struct ArticleRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ArticleRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets one page of articles and the number of articles matching the filters.
    ///
    /// Rows are ordered by the requested column, then by `article_id` ascending so pages
    /// are stable when the sort column has ties. The total ignores `limit` and `p`.
    pub async fn get_paginated(
        &self,
        params: &ListArticlesParams,
    ) -> Result<(Vec<Article>, u64), DbErr> {
        let total = Self::filtered(entity::prelude::Article::find(), params)
            .count(self.db)
            .await?;

        let rows = Self::filtered(with_comment_count(), params)
            .order_by(sort_expr(params.sort_by), params.order.into_order())
            .order_by_asc(entity::article::Column::ArticleId)
            .limit(params.pagination.limit)
            .offset(params.pagination.offset())
            .into_model::<ArticleWithCommentCount>()
            .all(self.db)
            .await?;

        Ok((rows.into_iter().map(Article::from_row).collect(), total))
    }

    /// Gets an article by ID with its comment count
    pub async fn get_by_id(&self, article_id: i32) -> Result<Option<Article>, DbErr> {
        let row = with_comment_count()
            .filter(entity::article::Column::ArticleId.eq(article_id))
            .into_model::<ArticleWithCommentCount>()
            .one(self.db)
            .await?;

        Ok(row.map(Article::from_row))
    }

    /// Checks whether an article exists
    pub async fn exists(&self, article_id: i32) -> Result<bool, DbErr> {
        let count = entity::prelude::Article::find_by_id(article_id)
            .count(self.db)
            .await?;

        Ok(count > 0)
    }

    /// Adds `inc_votes` to the article's vote total in a single UPDATE.
    ///
    /// The row is only updated when the new total still fits in an `i64`.
    ///
    /// # Returns
    /// - `Ok(true)` - Article was updated
    /// - `Ok(false)` - No article with this ID, or the total would overflow
    pub async fn increment_votes(&self, article_id: i32, inc_votes: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::Article::update_many()
            .col_expr(
                entity::article::Column::Votes,
                Expr::col(entity::article::Column::Votes).add(i64::from(inc_votes)),
            )
            .filter(entity::article::Column::ArticleId.eq(article_id))
            .filter(votes_headroom(entity::article::Column::Votes, inc_votes))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }

    fn filtered(
        query: Select<entity::article::Entity>,
        params: &ListArticlesParams,
    ) -> Select<entity::article::Entity> {
        let mut query = query;
        if let Some(author) = &params.author {
            query = query.filter(entity::article::Column::Author.eq(author.as_str()));
        }
        if let Some(topic) = &params.topic {
            query = query.filter(entity::article::Column::Topic.eq(topic.as_str()));
        }
        query
    }
}

/// Articles left-joined to their comments and grouped, with a `comment_count` column.
fn with_comment_count() -> Select<entity::article::Entity> {
    entity::prelude::Article::find()
        .column_as(comment_count_expr(), "comment_count")
        .join(JoinType::LeftJoin, entity::article::Relation::Comment.def())
        .group_by(entity::article::Column::ArticleId)
}

fn comment_count_expr() -> Expr {
    Func::count(Expr::col((
        entity::comment::Entity,
        entity::comment::Column::CommentId,
    )))
    .into()
}

fn sort_expr(key: ArticleSortKey) -> Expr {
    use entity::article::{Column, Entity};

    let column = match key {
        ArticleSortKey::Author => Column::Author,
        ArticleSortKey::Title => Column::Title,
        ArticleSortKey::ArticleId => Column::ArticleId,
        ArticleSortKey::Topic => Column::Topic,
        ArticleSortKey::CreatedAt => Column::CreatedAt,
        ArticleSortKey::Votes => Column::Votes,
        ArticleSortKey::CommentCount => return comment_count_expr(),
    };

    Expr::col((Entity, column))
}
