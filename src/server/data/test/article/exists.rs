use super::*;

/// Tests existence checks for present and missing articles.
///
/// Expected: true for a created article, false otherwise
#[tokio::test]
async fn reports_article_existence() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_news_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let (_, _, article) = factory::helpers::create_article_with_dependencies(db).await?;

    let repo = ArticleRepository::new(db);

    assert!(repo.exists(article.article_id).await?);
    assert!(!repo.exists(article.article_id + 1).await?);

    Ok(())
}
