use super::*;

mod require_admin;

/// Tests an empty permission list grants access.
///
/// Verifies that when no permissions are required, any authenticated
/// user with a valid database record is granted access.
///
/// Expected: Ok(User)
#[tokio::test]
async fn empty_permission_list_grants_access() -> Result<(), AppError> {
    let mut test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let (db, session) = test.db_and_session().await.unwrap();

    let user = factory::user::create_user(db).await?;

    let auth_session = AuthSession::new(session);
    auth_session.set_user_id(user.id).await?;

    let auth_guard = AuthGuard::new(db, session);
    let result = auth_guard.require(&[]).await;

    assert!(result.is_ok());
    let returned_user = result.unwrap();
    assert_eq!(returned_user.id, user.id);
    assert_eq!(returned_user.email, user.email);

    Ok(())
}

/// Tests a request without a session user is rejected.
///
/// Expected: Err(AuthError::UserNotInSession)
#[tokio::test]
async fn rejects_missing_session_user() -> Result<(), AppError> {
    let mut test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let (db, session) = test.db_and_session().await.unwrap();

    let auth_guard = AuthGuard::new(db, session);
    let result = auth_guard.require(&[]).await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::UserNotInSession))
    ));

    Ok(())
}

/// Tests a session pointing at a deleted user is rejected.
///
/// Verifies that a stale session whose user row no longer exists does not
/// authenticate.
///
/// Expected: Err(AuthError::UserNotInDatabase)
#[tokio::test]
async fn rejects_session_user_missing_from_database() -> Result<(), AppError> {
    let mut test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let (db, session) = test.db_and_session().await.unwrap();

    let auth_session = AuthSession::new(session);
    auth_session.set_user_id(4242).await?;

    let auth_guard = AuthGuard::new(db, session);
    let result = auth_guard.require(&[]).await;

    match result {
        Err(AppError::AuthErr(AuthError::UserNotInDatabase(user_id))) => {
            assert_eq!(user_id, 4242);
        }
        other => panic!("Expected UserNotInDatabase error, got: {:?}", other.map(|u| u.id)),
    }

    Ok(())
}
