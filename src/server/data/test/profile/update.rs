use super::*;

/// Tests updating a profile addressed by its current slug, including a slug change.
///
/// Expected: found under the new slug only
#[tokio::test]
async fn updates_profile_and_slug() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Profile)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::profile::create_profile_with_slug(db, "sam").await?;

    let repo = ProfileRepository::new(db);
    let updated = repo.update("sam", param("samantha")).await?.unwrap();

    assert_eq!(updated.slug, "samantha");
    assert_eq!(updated.nickname.as_deref(), Some("Sunshine"));
    assert!(repo.find_by_slug("sam").await?.is_none());
    assert!(repo.find_by_slug("samantha").await?.is_some());

    Ok(())
}

/// Tests deleting by slug.
///
/// Expected: true once, then false
#[tokio::test]
async fn deletes_by_slug() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Profile)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::profile::create_profile_with_slug(db, "sam").await?;

    let repo = ProfileRepository::new(db);

    assert!(repo.delete_by_slug("sam").await?);
    assert!(!repo.delete_by_slug("sam").await?);
    assert_eq!(repo.count().await?, 0);

    Ok(())
}
