use super::*;

/// Tests updating a news item.
///
/// Expected: Ok(Some(News)) with the new values, found under the new slug
#[tokio::test]
async fn updates_news() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::News)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let news = factory::create_news(db).await?;

    let repo = NewsRepository::new(db);
    let updated = repo.update(news.id, record("we-moved")).await?.unwrap();

    assert_eq!(updated.slug, "we-moved");
    assert_eq!(updated.title, "We moved!");
    assert!(repo.find_by_slug("we-moved").await?.is_some());
    assert!(repo.find_by_slug(&news.slug).await?.is_none());

    Ok(())
}

/// Tests updating a missing news item.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_missing_news() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::News)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = NewsRepository::new(db);

    assert!(repo.update(1, record("anything")).await?.is_none());

    Ok(())
}
