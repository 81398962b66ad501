use super::*;

/// Tests slug collision detection.
///
/// Expected: true for a taken slug, false for a free slug
#[tokio::test]
async fn detects_taken_slug() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::News)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::news::NewsFactory::new(db)
        .slug("we-moved")
        .build()
        .await?;

    let repo = NewsRepository::new(db);

    assert!(repo.slug_exists("we-moved", None).await?);
    assert!(!repo.slug_exists("we-moved-2", None).await?);

    Ok(())
}

/// Tests a row does not collide with its own slug.
///
/// Verifies that updates keeping the same slug are not treated as collisions.
///
/// Expected: false when excluding the owning row
#[tokio::test]
async fn ignores_excluded_row() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::News)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let news = factory::news::NewsFactory::new(db)
        .slug("we-moved")
        .build()
        .await?;

    let repo = NewsRepository::new(db);

    assert!(!repo.slug_exists("we-moved", Some(news.id)).await?);

    Ok(())
}
