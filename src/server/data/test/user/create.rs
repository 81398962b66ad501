use super::*;

/// Tests creating a user.
///
/// Verifies that the repository inserts the user and returns the domain model
/// with the stored role and timestamps.
///
/// Expected: Ok(User)
#[tokio::test]
async fn creates_user() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);
    let user = repo
        .create(CreateUserParam {
            email: "us@example.com".to_string(),
            display_name: "Us".to_string(),
            password_hash: "$argon2id$placeholder".to_string(),
            role: UserRole::Admin,
        })
        .await?;

    assert!(user.id > 0);
    assert_eq!(user.email, "us@example.com");
    assert!(user.is_admin());
    assert_eq!(user.created_at, user.updated_at);

    Ok(())
}

/// Tests the unique email constraint.
///
/// Expected: Err(DbErr) on the second insert
#[tokio::test]
async fn rejects_duplicate_email() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let existing = factory::user::create_user(db).await?;

    let repo = UserRepository::new(db);
    let result = repo
        .create(CreateUserParam {
            email: existing.email.clone(),
            display_name: "Someone else".to_string(),
            password_hash: "$argon2id$placeholder".to_string(),
            role: UserRole::Member,
        })
        .await;

    assert!(result.is_err());

    Ok(())
}
