use super::*;

/// Tests admin user successfully passes admin permission check.
///
/// Verifies that the AuthGuard grants access when the user is authenticated,
/// exists in the database, and has the admin role.
///
/// Expected: Ok(User) with admin role
#[tokio::test]
async fn grants_access_to_admin_user() -> Result<(), AppError> {
    let mut test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let (db, session) = test.db_and_session().await.unwrap();

    let user = factory::user::UserFactory::new(db)
        .email("admin@example.com")
        .display_name("Admin")
        .admin(true)
        .build()
        .await?;

    let auth_session = AuthSession::new(session);
    auth_session.set_user_id(user.id).await?;

    let auth_guard = AuthGuard::new(db, session);
    let result = auth_guard.require(&[Permission::Admin]).await;

    assert!(result.is_ok());
    let returned_user = result.unwrap();
    assert_eq!(returned_user.email, "admin@example.com");
    assert_eq!(returned_user.display_name, "Admin");
    assert!(returned_user.is_admin());

    Ok(())
}

/// Tests member user is denied admin permission.
///
/// Verifies that the AuthGuard denies access when the user is authenticated,
/// exists in the database, but only has the member role.
///
/// Expected: Err(AuthError::AccessDenied)
#[tokio::test]
async fn denies_access_to_member_user() -> Result<(), AppError> {
    let mut test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let (db, session) = test.db_and_session().await.unwrap();

    let user = factory::user::UserFactory::new(db)
        .admin(false)
        .build()
        .await?;

    let auth_session = AuthSession::new(session);
    auth_session.set_user_id(user.id).await?;

    let auth_guard = AuthGuard::new(db, session);
    let result = auth_guard.require(&[Permission::Admin]).await;

    match result {
        Err(AppError::AuthErr(AuthError::AccessDenied(user_id, _))) => {
            assert_eq!(user_id, user.id);
        }
        other => panic!("Expected AccessDenied error, got: {:?}", other.map(|u| u.id)),
    }

    Ok(())
}
