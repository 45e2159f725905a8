use super::*;

/// Tests finding an existing user.
///
/// Expected: Ok(Some(User)) with every field populated
#[tokio::test]
async fn finds_existing_user() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_news_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let created = factory::user::UserFactory::new(db)
        .username("butter_bridge")
        .name("jonny")
        .avatar_url("https://example.com/lime.jpg")
        .build()
        .await?;

    let user = UserRepository::new(db)
        .find_by_username("butter_bridge")
        .await?
        .unwrap();

    assert_eq!(user.username, created.username);
    assert_eq!(user.name, "jonny");
    assert_eq!(user.avatar_url, "https://example.com/lime.jpg");

    Ok(())
}

/// Tests finding a username that does not exist.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_unknown_username() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_news_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    factory::create_user(db).await?;

    let user = UserRepository::new(db).find_by_username("nobody").await?;

    assert!(user.is_none());

    Ok(())
}
