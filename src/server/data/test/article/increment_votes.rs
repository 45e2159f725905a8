use super::*;

/// Tests incrementing and then decrementing votes by the same amount.
///
/// Expected: votes return to the original value
#[tokio::test]
async fn increment_then_decrement_restores_votes() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_news_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    factory::seed_news_data(db).await?;

    let repo = ArticleRepository::new(db);

    assert!(repo.increment_votes(1, 7).await?);
    assert_eq!(repo.get_by_id(1).await?.unwrap().votes, 107);

    assert!(repo.increment_votes(1, -7).await?);
    assert_eq!(repo.get_by_id(1).await?.unwrap().votes, 100);

    Ok(())
}

/// Tests that votes may go negative.
///
/// Expected: votes below zero are stored unchanged
#[tokio::test]
async fn allows_negative_votes() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_news_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let (_, _, article) = factory::helpers::create_article_with_dependencies(db).await?;

    ArticleRepository::new(db)
        .increment_votes(article.article_id, -25)
        .await?;

    let stored = entity::prelude::Article::find_by_id(article.article_id)
        .one(db)
        .await?
        .unwrap();
    assert_eq!(stored.votes, -25);

    Ok(())
}

/// Tests incrementing votes on a missing article.
///
/// Expected: Ok(false)
#[tokio::test]
async fn returns_false_for_missing_article() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_news_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let updated = ArticleRepository::new(db).increment_votes(999, 1).await?;

    assert!(!updated);

    Ok(())
}

/// Tests increments at the `i32` limits.
///
/// Expected: totals past the `i32` range are stored and read back
#[tokio::test]
async fn stores_totals_beyond_i32_range() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_news_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    factory::seed_news_data(db).await?;

    let repo = ArticleRepository::new(db);

    assert!(repo.increment_votes(1, i32::MAX).await?);
    assert_eq!(
        repo.get_by_id(1).await?.unwrap().votes,
        100 + i64::from(i32::MAX)
    );

    assert!(repo.increment_votes(2, i32::MIN).await?);
    assert!(repo.increment_votes(2, i32::MIN).await?);
    assert_eq!(
        repo.get_by_id(2).await?.unwrap().votes,
        2 * i64::from(i32::MIN)
    );

    Ok(())
}

/// Tests an increment that would overflow the stored total.
///
/// Expected: Ok(false) and the total left unchanged
#[tokio::test]
async fn refuses_overflowing_increment() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_news_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let topic = factory::topic::create_topic(db).await?;
    let user = factory::user::create_user(db).await?;
    let article = factory::article::ArticleFactory::new(db, &topic.slug, &user.username)
        .votes(i64::MAX - 1)
        .build()
        .await?;

    let repo = ArticleRepository::new(db);

    assert!(!repo.increment_votes(article.article_id, 2).await?);
    assert!(repo.increment_votes(article.article_id, 1).await?);

    let stored = entity::prelude::Article::find_by_id(article.article_id)
        .one(db)
        .await?
        .unwrap();
    assert_eq!(stored.votes, i64::MAX);

    Ok(())
}
