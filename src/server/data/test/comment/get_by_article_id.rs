use super::*;

/// Tests the default comment listing: newest first, ten per page.
///
/// Expected: comments 2..=11 of article 1
#[tokio::test]
async fn defaults_to_newest_first() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_news_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    factory::seed_news_data(db).await?;

    let comments = CommentRepository::new(db)
        .get_by_article_id(1, &ListCommentsParams::default())
        .await?;

    let ids: Vec<i32> = comments.iter().map(|c| c.comment_id).collect();
    assert_eq!(ids, (2..=11).collect::<Vec<_>>());
    assert!(comments.iter().all(|c| c.article_id == 1));

    Ok(())
}

/// Tests sorting by votes ascending with `comment_id` breaking ties.
///
/// Expected: -100 first, then the zero-vote comments by ascending id
#[tokio::test]
async fn sorts_by_votes_with_tie_break() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_news_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    factory::seed_news_data(db).await?;

    let params = ListCommentsParams {
        sort_by: CommentSortKey::Votes,
        order: SortOrder::Asc,
        pagination: Pagination { limit: 4, page: 1 },
    };

    let comments = CommentRepository::new(db)
        .get_by_article_id(1, &params)
        .await?;

    let ids: Vec<i32> = comments.iter().map(|c| c.comment_id).collect();
    assert_eq!(ids, [4, 5, 6, 7]);
    assert_eq!(comments[0].votes, -100);

    Ok(())
}

/// Tests the second page of an article's comments.
///
/// Expected: the last three comments of article 1
#[tokio::test]
async fn paginates_comments() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_news_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    factory::seed_news_data(db).await?;

    let params = ListCommentsParams {
        pagination: Pagination {
            limit: 10,
            page: 2,
        },
        ..Default::default()
    };

    let comments = CommentRepository::new(db)
        .get_by_article_id(1, &params)
        .await?;

    let ids: Vec<i32> = comments.iter().map(|c| c.comment_id).collect();
    assert_eq!(ids, [12, 13, 14]);

    Ok(())
}

/// Tests listing comments of an article that has none.
///
/// Expected: Ok(empty Vec)
#[tokio::test]
async fn returns_empty_list_for_article_without_comments() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_news_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    factory::seed_news_data(db).await?;

    let comments = CommentRepository::new(db)
        .get_by_article_id(2, &ListCommentsParams::default())
        .await?;

    assert!(comments.is_empty());

    Ok(())
}
