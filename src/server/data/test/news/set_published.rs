use super::*;

/// Tests toggling the published flag.
///
/// Expected: draft becomes published, then unpublished again
#[tokio::test]
async fn toggles_published_flag() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::News)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let draft = factory::news::NewsFactory::new(db)
        .published(false)
        .build()
        .await?;

    let repo = NewsRepository::new(db);

    let published = repo.set_published(draft.id, true).await?.unwrap();
    assert!(published.published);

    let unpublished = repo.set_published(draft.id, false).await?.unwrap();
    assert!(!unpublished.published);

    assert!(repo.set_published(draft.id + 100, true).await?.is_none());

    Ok(())
}
