use super::*;

/// Tests replacing a password hash.
///
/// Expected: Ok(true) and the new hash persisted
#[tokio::test]
async fn replaces_password_hash() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::create_user(db).await?;

    let repo = UserRepository::new(db);
    let updated = repo
        .update_password(user.id, "$argon2id$new".to_string())
        .await?;

    assert!(updated);
    let reloaded = repo.find_by_id(user.id).await?.unwrap();
    assert_eq!(reloaded.password_hash, "$argon2id$new");
    assert!(reloaded.updated_at >= user.updated_at);

    Ok(())
}

/// Tests updating a missing user reports nothing changed.
///
/// Expected: Ok(false)
#[tokio::test]
async fn returns_false_for_missing_user() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);
    let updated = repo.update_password(99, "hash".to_string()).await?;

    assert!(!updated);

    Ok(())
}
