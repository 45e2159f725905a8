use sea_orm_migration::{prelude::*, schema::*};

use super::{m20190823_000001_create_topic_table::Topic, m20190823_000002_create_user_table::User};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Article::Table)
                    .if_not_exists()
                    .col(pk_auto(Article::ArticleId))
                    .col(string(Article::Title))
                    .col(text(Article::Body))
                    .col(string(Article::Topic))
                    .col(string(Article::Author))
                    .col(
                        timestamp_with_time_zone(Article::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .col(big_integer(Article::Votes).default(0))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_article_topic")
                            .from(Article::Table, Article::Topic)
                            .to(Topic::Table, Topic::Slug)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_article_author")
                            .from(Article::Table, Article::Author)
                            .to(User::Table, User::Username)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_article_author")
                    .table(Article::Table)
                    .col(Article::Author)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_article_topic")
                    .table(Article::Table)
                    .col(Article::Topic)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Article::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Article {
    #[sea_orm(iden = "articles")]
    Table,
    ArticleId,
    Title,
    Body,
    Topic,
    Author,
    CreatedAt,
    Votes,
}
