use super::*;

/// Tests the optional lookup returns the logged-in user.
///
/// Expected: Ok(Some(User))
#[tokio::test]
async fn returns_logged_in_user() -> Result<(), AppError> {
    let mut test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let (db, session) = test.db_and_session().await.unwrap();

    let user = factory::user::create_admin(db).await?;
    AuthSession::new(session).set_user_id(user.id).await?;

    let current = AuthGuard::new(db, session).current_user().await?;

    assert_eq!(current.map(|u| u.id), Some(user.id));

    Ok(())
}

/// Tests anonymous requests yield no user instead of an error.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_when_anonymous() -> Result<(), AppError> {
    let mut test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let (db, session) = test.db_and_session().await.unwrap();

    let current = AuthGuard::new(db, session).current_user().await?;

    assert!(current.is_none());

    Ok(())
}
