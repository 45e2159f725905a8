use super::*;

/// Tests deleting a comment twice.
///
/// Expected: Ok(true) on the first call, Ok(false) on the second
#[tokio::test]
async fn deletes_comment_once() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_news_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let (_, user, article) = factory::helpers::create_article_with_dependencies(db).await?;
    let comment = factory::create_comment(db, article.article_id, &user.username).await?;

    let repo = CommentRepository::new(db);

    assert!(repo.delete(comment.comment_id).await?);
    assert!(!repo.delete(comment.comment_id).await?);
    assert!(repo.get_by_id(comment.comment_id).await?.is_none());

    Ok(())
}

/// Tests that deleting a comment lowers the article's comment count.
///
/// Expected: article 5 goes from 2 comments to 1
#[tokio::test]
async fn delete_updates_comment_count() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_news_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    factory::seed_news_data(db).await?;

    CommentRepository::new(db).delete(15).await?;

    let article = crate::server::data::article::ArticleRepository::new(db)
        .get_by_id(5)
        .await?
        .unwrap();
    assert_eq!(article.comment_count, 1);

    Ok(())
}
