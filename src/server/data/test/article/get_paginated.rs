use super::*;

/// Tests the default listing: newest first, ten per page.
///
/// Expected: articles 1..=10 and a total of 12
#[tokio::test]
async fn defaults_to_newest_first() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_news_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    factory::seed_news_data(db).await?;

    let (articles, total) = ArticleRepository::new(db)
        .get_paginated(&ListArticlesParams::default())
        .await?;

    assert_eq!(total, 12);
    assert_eq!(ids(&articles), (1..=10).collect::<Vec<_>>());

    Ok(())
}

/// Tests sorting by title ascending.
///
/// Expected: titles in ascending order
#[tokio::test]
async fn sorts_by_title_ascending() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_news_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    factory::seed_news_data(db).await?;

    let params = ListArticlesParams {
        sort_by: ArticleSortKey::Title,
        order: SortOrder::Asc,
        pagination: Pagination {
            limit: 20,
            page: 1,
        },
        ..Default::default()
    };

    let (articles, _) = ArticleRepository::new(db).get_paginated(&params).await?;

    let titles: Vec<&str> = articles.iter().map(|a| a.title.as_str()).collect();
    let mut sorted = titles.clone();
    sorted.sort_unstable();
    assert_eq!(titles, sorted);
    assert_eq!(titles.first(), Some(&"A"));

    Ok(())
}

/// Tests sorting by the aggregated comment count with `article_id` breaking ties.
///
/// Expected: 1 (13 comments), 5 and 9 (2 each, ascending id), 6 (1), then the rest
#[tokio::test]
async fn sorts_by_comment_count_with_tie_break() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_news_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    factory::seed_news_data(db).await?;

    let params = ListArticlesParams {
        sort_by: ArticleSortKey::CommentCount,
        ..Default::default()
    };

    let (articles, _) = ArticleRepository::new(db).get_paginated(&params).await?;

    assert_eq!(ids(&articles), [1, 5, 9, 6, 2, 3, 4, 7, 8, 10]);
    assert_eq!(articles[0].comment_count, 13);
    assert_eq!(articles[1].comment_count, 2);

    Ok(())
}

/// Tests that equal sort values are ordered by ascending `article_id`.
///
/// Expected: 1 first (100 votes), then remaining ids ascending
#[tokio::test]
async fn breaks_vote_ties_by_article_id() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_news_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    factory::seed_news_data(db).await?;

    let params = ListArticlesParams {
        sort_by: ArticleSortKey::Votes,
        ..Default::default()
    };

    let (articles, _) = ArticleRepository::new(db).get_paginated(&params).await?;

    assert_eq!(ids(&articles), (1..=10).collect::<Vec<_>>());

    Ok(())
}

/// Tests filtering by author and topic.
///
/// Expected: total counts reflect the filters
#[tokio::test]
async fn filters_by_author_and_topic() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_news_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    factory::seed_news_data(db).await?;

    let repo = ArticleRepository::new(db);

    let by_author = ListArticlesParams {
        author: Some("butter_bridge".to_string()),
        ..Default::default()
    };
    let (articles, total) = repo.get_paginated(&by_author).await?;
    assert_eq!(total, 3);
    assert_eq!(ids(&articles), [1, 9, 12]);

    let by_topic = ListArticlesParams {
        topic: Some("cats".to_string()),
        ..Default::default()
    };
    let (articles, total) = repo.get_paginated(&by_topic).await?;
    assert_eq!(total, 1);
    assert_eq!(ids(&articles), [5]);

    let both = ListArticlesParams {
        author: Some("rogersop".to_string()),
        topic: Some("mitch".to_string()),
        ..Default::default()
    };
    let (articles, total) = repo.get_paginated(&both).await?;
    assert_eq!(total, 2);
    assert_eq!(ids(&articles), [4, 10]);

    Ok(())
}

/// Tests that the total is unaffected by the page window.
///
/// Expected: second page of five holds articles 6..=10, total still 12
#[tokio::test]
async fn total_ignores_pagination() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_news_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    factory::seed_news_data(db).await?;

    let params = ListArticlesParams {
        pagination: Pagination { limit: 5, page: 2 },
        ..Default::default()
    };

    let (articles, total) = ArticleRepository::new(db).get_paginated(&params).await?;

    assert_eq!(total, 12);
    assert_eq!(ids(&articles), [6, 7, 8, 9, 10]);

    Ok(())
}

/// Tests requesting a page past the end of the collection.
///
/// Expected: empty page with the full total
#[tokio::test]
async fn page_past_end_is_empty() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_news_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    factory::seed_news_data(db).await?;

    let params = ListArticlesParams {
        pagination: Pagination { limit: 10, page: 5 },
        ..Default::default()
    };

    let (articles, total) = ArticleRepository::new(db).get_paginated(&params).await?;

    assert!(articles.is_empty());
    assert_eq!(total, 12);

    Ok(())
}
