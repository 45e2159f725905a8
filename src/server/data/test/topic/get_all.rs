use super::*;

/// Tests listing topics on an empty table.
///
/// Expected: Ok(empty Vec)
#[tokio::test]
async fn returns_empty_list_without_topics() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_news_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let topics = TopicRepository::new(db).get_all().await?;

    assert!(topics.is_empty());

    Ok(())
}

/// Tests listing every seeded topic ordered by slug.
///
/// Expected: Ok(Vec) with slugs in ascending order
#[tokio::test]
async fn returns_all_topics_ordered_by_slug() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_news_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    factory::seed_news_data(db).await?;

    let topics = TopicRepository::new(db).get_all().await?;

    let slugs: Vec<&str> = topics.iter().map(|t| t.slug.as_str()).collect();
    assert_eq!(slugs, ["cats", "mitch", "paper"]);
    assert_eq!(topics[1].description, "The man, the Mitch, the legend");

    Ok(())
}
