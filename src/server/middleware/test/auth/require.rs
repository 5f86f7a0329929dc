use super::*;

/// Tests a valid access token grants access without permissions.
///
/// Expected: Ok(User) matching the token subject
#[tokio::test]
async fn grants_access_with_valid_token() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let keys = TokenKeys::new("secret", 60);

    let user = factory::create_user(db).await?;
    let pair = keys.issue(user.id, user.admin, Utc::now())?;
    let headers = headers_with(&format!("Bearer {}", pair.access_token));

    let returned = AuthGuard::new(db, &keys, &headers).require(&[]).await?;

    assert_eq!(returned.id, user.id);
    assert_eq!(returned.username, user.username);

    Ok(())
}

/// Tests a request without a token.
///
/// Expected: Err(AuthError::MissingToken)
#[tokio::test]
async fn denies_missing_token() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let keys = TokenKeys::new("secret", 60);
    let headers = HeaderMap::new();

    let result = AuthGuard::new(db, &keys, &headers).require(&[]).await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::MissingToken))
    ));

    Ok(())
}

/// Tests a refresh token presented as an access token.
///
/// Expected: Err(AuthError::InvalidToken)
#[tokio::test]
async fn denies_refresh_token() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let keys = TokenKeys::new("secret", 60);

    let user = factory::create_user(db).await?;
    let pair = keys.issue(user.id, user.admin, Utc::now())?;
    let headers = headers_with(&format!("Bearer {}", pair.refresh_token));

    let result = AuthGuard::new(db, &keys, &headers).require(&[]).await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::InvalidToken(_)))
    ));

    Ok(())
}

/// Tests admin permission with admin and non-admin users.
///
/// Expected: Ok for the admin, Err(AuthError::AccessDenied) for the other user
#[tokio::test]
async fn admin_permission_requires_admin_flag() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let keys = TokenKeys::new("secret", 60);

    let admin = factory::user::UserFactory::new(db).admin(true).build().await?;
    let member = factory::create_user(db).await?;

    let admin_headers = headers_with(&format!(
        "Bearer {}",
        keys.issue(admin.id, true, Utc::now())?.access_token
    ));
    let member_headers = headers_with(&format!(
        "Bearer {}",
        keys.issue(member.id, false, Utc::now())?.access_token
    ));

    assert!(AuthGuard::new(db, &keys, &admin_headers)
        .require(&[Permission::Admin])
        .await
        .is_ok());

    let result = AuthGuard::new(db, &keys, &member_headers)
        .require(&[Permission::Admin])
        .await;
    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::AccessDenied(id, _))) if id == member.id
    ));

    Ok(())
}
