use sea_orm_migration::{prelude::*, schema::*};

use super::{
    m20190823_000002_create_user_table::User, m20190823_000003_create_article_table::Article,
};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Comment::Table)
                    .if_not_exists()
                    .col(pk_auto(Comment::CommentId))
                    .col(string(Comment::Author))
                    .col(integer(Comment::ArticleId))
                    .col(big_integer(Comment::Votes).default(0))
                    .col(
                        timestamp_with_time_zone(Comment::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .col(text(Comment::Body))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_comment_article_id")
                            .from(Comment::Table, Comment::ArticleId)
                            .to(Article::Table, Article::ArticleId)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_comment_author")
                            .from(Comment::Table, Comment::Author)
                            .to(User::Table, User::Username)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // Comment listing is always scoped to one article
        manager
            .create_index(
                Index::create()
                    .name("idx_comment_article_id")
                    .table(Comment::Table)
                    .col(Comment::ArticleId)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Comment::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Comment {
    #[sea_orm(iden = "comments")]
    Table,
    CommentId,
    Author,
    ArticleId,
    Votes,
    CreatedAt,
    Body,
}
