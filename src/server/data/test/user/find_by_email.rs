use super::*;

/// Tests finding a user by email.
///
/// Expected: Ok(Some(User))
#[tokio::test]
async fn finds_existing_user() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::UserFactory::new(db)
        .email("found@example.com")
        .build()
        .await?;

    let repo = UserRepository::new(db);
    let result = repo.find_by_email("found@example.com").await?;

    assert_eq!(result.map(|u| u.id), Some(user.id));

    Ok(())
}

/// Tests an unknown email yields no user.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_unknown_email() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::user::create_user(db).await?;

    let repo = UserRepository::new(db);
    let result = repo.find_by_email("nobody@example.com").await?;

    assert!(result.is_none());

    Ok(())
}
