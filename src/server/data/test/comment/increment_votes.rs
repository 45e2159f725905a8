use super::*;

/// Tests incrementing a comment's votes.
///
/// Expected: Ok(true) and the stored votes reflect the increment
#[tokio::test]
async fn increments_votes() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_news_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    factory::seed_news_data(db).await?;

    let repo = CommentRepository::new(db);

    assert!(repo.increment_votes(1, 1).await?);
    assert_eq!(repo.get_by_id(1).await?.unwrap().votes, 17);

    assert!(repo.increment_votes(1, -20).await?);
    assert_eq!(repo.get_by_id(1).await?.unwrap().votes, -3);

    Ok(())
}

/// Tests incrementing votes on a missing comment.
///
/// Expected: Ok(false)
#[tokio::test]
async fn returns_false_for_missing_comment() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_news_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let updated = CommentRepository::new(db).increment_votes(999, 1).await?;

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

    let repo = CommentRepository::new(db);

    assert!(repo.increment_votes(1, i32::MAX).await?);
    assert_eq!(
        repo.get_by_id(1).await?.unwrap().votes,
        16 + i64::from(i32::MAX)
    );

    assert!(repo.increment_votes(4, i32::MIN).await?);
    assert_eq!(
        repo.get_by_id(4).await?.unwrap().votes,
        -100 + i64::from(i32::MIN)
    );

    Ok(())
}

/// Tests an increment that would underflow the stored total.
///
/// Expected: Ok(false) and the total left unchanged
#[tokio::test]
async fn refuses_underflowing_increment() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_news_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let (_, user, article) = factory::helpers::create_article_with_dependencies(db).await?;
    let comment = factory::comment::CommentFactory::new(db, article.article_id, &user.username)
        .votes(i64::MIN + 1)
        .build()
        .await?;

    let repo = CommentRepository::new(db);

    assert!(!repo.increment_votes(comment.comment_id, -2).await?);
    assert_eq!(
        repo.get_by_id(comment.comment_id).await?.unwrap().votes,
        i64::MIN + 1
    );

    Ok(())
}
