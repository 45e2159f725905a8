use chrono::Utc;
use sea_orm::{
    sea_query::{Expr, ExprTrait},
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter, QueryOrder, QuerySelect,
};

use crate::server::{
    data::votes_headroom,
    model::comment::{Comment, CommentSortKey, CreateCommentParams, ListCommentsParams},
};

pub struct CommentRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> CommentRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets one page of an article's comments.
    ///
    /// Ties on the sort column are broken by `comment_id` ascending. Does not check that
    /// the article exists.
    pub async fn get_by_article_id(
        &self,
        article_id: i32,
        params: &ListCommentsParams,
    ) -> Result<Vec<Comment>, DbErr> {
        let comments = entity::prelude::Comment::find()
            .filter(entity::comment::Column::ArticleId.eq(article_id))
            .order_by(sort_column(params.sort_by), params.order.into_order())
            .order_by_asc(entity::comment::Column::CommentId)
            .limit(params.pagination.limit)
            .offset(params.pagination.offset())
            .all(self.db)
            .await?;

        Ok(comments.into_iter().map(Comment::from_entity).collect())
    }

    /// Gets a comment by ID
    pub async fn get_by_id(&self, comment_id: i32) -> Result<Option<Comment>, DbErr> {
        let comment = entity::prelude::Comment::find_by_id(comment_id)
            .one(self.db)
            .await?;

        Ok(comment.map(Comment::from_entity))
    }

    /// Inserts a comment with zero votes, timestamped now.
    ///
    /// Fails with a foreign key violation when the article or author does not exist.
    pub async fn create(&self, params: CreateCommentParams) -> Result<Comment, DbErr> {
        let comment = entity::comment::ActiveModel {
            author: ActiveValue::Set(params.author),
            article_id: ActiveValue::Set(params.article_id),
            votes: ActiveValue::Set(0),
            created_at: ActiveValue::Set(Utc::now()),
            body: ActiveValue::Set(params.body),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Comment::from_entity(comment))
    }

    /// Adds `inc_votes` to the comment's vote total in a single UPDATE.
    ///
    /// The row is only updated when the new total still fits in an `i64`.
    ///
    /// # Returns
    /// - `Ok(true)` - Comment was updated
    /// - `Ok(false)` - No comment with this ID, or the total would overflow
    pub async fn increment_votes(&self, comment_id: i32, inc_votes: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::Comment::update_many()
            .col_expr(
                entity::comment::Column::Votes,
                Expr::col(entity::comment::Column::Votes).add(i64::from(inc_votes)),
            )
            .filter(entity::comment::Column::CommentId.eq(comment_id))
            .filter(votes_headroom(entity::comment::Column::Votes, inc_votes))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }

    /// Deletes a comment, returning whether a row was removed
    pub async fn delete(&self, comment_id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::Comment::delete_by_id(comment_id)
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }
}

fn sort_column(key: CommentSortKey) -> entity::comment::Column {
    use entity::comment::Column;

    match key {
        CommentSortKey::CommentId => Column::CommentId,
        CommentSortKey::Votes => Column::Votes,
        CommentSortKey::CreatedAt => Column::CreatedAt,
        CommentSortKey::Author => Column::Author,
        CommentSortKey::Body => Column::Body,
    }
}
