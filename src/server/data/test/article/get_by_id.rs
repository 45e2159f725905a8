use super::*;

/// Tests getting a seeded article with its comment count.
///
/// Expected: Ok(Some(Article)) with body and comment_count 13
#[tokio::test]
async fn gets_article_with_comment_count() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_news_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    factory::seed_news_data(db).await?;

    let article = ArticleRepository::new(db).get_by_id(1).await?.unwrap();

    assert_eq!(article.title, "Living in the shadow of a great man");
    assert_eq!(article.body, "I find this existence challenging");
    assert_eq!(article.author, "butter_bridge");
    assert_eq!(article.topic, "mitch");
    assert_eq!(article.votes, 100);
    assert_eq!(article.comment_count, 13);

    Ok(())
}

/// Tests that an article without comments counts zero rather than disappearing from
/// the left join.
///
/// Expected: Ok(Some(Article)) with comment_count 0
#[tokio::test]
async fn counts_zero_comments() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_news_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let (_, _, created) = factory::helpers::create_article_with_dependencies(db).await?;

    let article = ArticleRepository::new(db)
        .get_by_id(created.article_id)
        .await?
        .unwrap();

    assert_eq!(article.comment_count, 0);

    Ok(())
}

/// Tests getting an article that does not exist.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_missing_article() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_news_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    factory::seed_news_data(db).await?;

    let article = ArticleRepository::new(db).get_by_id(999).await?;

    assert!(article.is_none());

    Ok(())
}
