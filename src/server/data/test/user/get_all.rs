use super::*;

/// Tests listing all seeded users.
///
/// Expected: Ok(Vec) with 4 users ordered by username
#[tokio::test]
async fn returns_all_users_ordered_by_username() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_news_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    factory::seed_news_data(db).await?;

    let users = UserRepository::new(db).get_all().await?;

    let usernames: Vec<&str> = users.iter().map(|u| u.username.as_str()).collect();
    assert_eq!(
        usernames,
        ["butter_bridge", "icellusedkars", "lurker", "rogersop"]
    );

    Ok(())
}
