use super::*;

/// Tests inserting a comment on an existing article.
///
/// Expected: Ok(Comment) with a generated id and zero votes
#[tokio::test]
async fn creates_comment_with_zero_votes() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_news_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let (_, user, article) = factory::helpers::create_article_with_dependencies(db).await?;

    let comment = CommentRepository::new(db)
        .create(CreateCommentParams {
            article_id: article.article_id,
            author: user.username.clone(),
            body: "bla bla bla".to_string(),
        })
        .await?;

    assert!(comment.comment_id > 0);
    assert_eq!(comment.article_id, article.article_id);
    assert_eq!(comment.author, user.username);
    assert_eq!(comment.body, "bla bla bla");
    assert_eq!(comment.votes, 0);

    assert_eq!(entity::prelude::Comment::find().count(db).await?, 1);

    Ok(())
}

/// Tests inserting a comment on an article that does not exist.
///
/// Expected: Err(DbErr) classified as a foreign key violation
#[tokio::test]
async fn rejects_missing_article() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_news_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let user = factory::create_user(db).await?;

    let result = CommentRepository::new(db)
        .create(CreateCommentParams {
            article_id: 999,
            author: user.username,
            body: "bla bla bla".to_string(),
        })
        .await;

    let err = result.unwrap_err();
    assert!(matches!(
        err.sql_err(),
        Some(SqlErr::ForeignKeyConstraintViolation(_))
    ));

    Ok(())
}

/// Tests inserting a comment by a user that does not exist.
///
/// Expected: Err(DbErr) classified as a foreign key violation
#[tokio::test]
async fn rejects_unknown_author() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_news_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let (_, _, article) = factory::helpers::create_article_with_dependencies(db).await?;

    let result = CommentRepository::new(db)
        .create(CreateCommentParams {
            article_id: article.article_id,
            author: "nobody".to_string(),
            body: "bla bla bla".to_string(),
        })
        .await;

    assert!(matches!(
        result.unwrap_err().sql_err(),
        Some(SqlErr::ForeignKeyConstraintViolation(_))
    ));

    Ok(())
}
