use super::*;

/// Tests slug uniqueness checks, including self-exclusion.
///
/// Expected: taken for other rows, free for the owning row
#[tokio::test]
async fn detects_slug_taken_by_other_profile() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Profile)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let profile = factory::profile::create_profile_with_slug(db, "sam").await?;

    let repo = ProfileRepository::new(db);

    assert!(repo.slug_exists("sam", None).await?);
    assert!(!repo.slug_exists("sam", Some(profile.id)).await?);
    assert!(!repo.slug_exists("alex", None).await?);

    Ok(())
}
