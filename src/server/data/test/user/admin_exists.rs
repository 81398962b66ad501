use super::*;

/// Tests detecting when admin users exist.
///
/// Expected: Ok(true)
#[tokio::test]
async fn returns_true_when_admin_exists() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::user::create_admin(db).await?;

    let repo = UserRepository::new(db);
    let result = repo.admin_exists().await;

    assert!(result.is_ok());
    assert!(result.unwrap());

    Ok(())
}

/// Tests detecting when no admin users exist.
///
/// Verifies that the repository returns false on an empty table (first-time setup).
///
/// Expected: Ok(false)
#[tokio::test]
async fn returns_false_when_no_admins() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);
    let result = repo.admin_exists().await;

    assert!(result.is_ok());
    assert!(!result.unwrap());

    Ok(())
}

/// Tests detecting when only member users exist.
///
/// Expected: Ok(false)
#[tokio::test]
async fn returns_false_with_only_members() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::user::create_user(db).await?;
    factory::user::create_user(db).await?;

    let repo = UserRepository::new(db);
    let result = repo.admin_exists().await?;

    assert!(!result);

    Ok(())
}
