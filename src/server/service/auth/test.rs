use test_utils::{builder::TestBuilder, factory};

use super::*;
use crate::server::error::AppError;

const CLIENT: &str = "192.0.2.10";

async fn create_user_with_password(
    db: &DatabaseConnection,
    username: &str,
    password: &str,
    admin: bool,
) -> Result<entity::user::Model, AppError> {
    let password_hash = hash_password(password.to_string()).await?;

    Ok(factory::user::UserFactory::new(db)
        .username(username)
        .password_hash(password_hash)
        .admin(admin)
        .build()
        .await?)
}

/// Tests that correct credentials yield tokens for the user.
///
/// Expected: Ok(TokenPair) whose access token authenticates the same user
#[tokio::test]
async fn login_issues_tokens_for_valid_credentials() -> Result<(), AppError> {
    let test = TestBuilder::new().with_auth_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let keys = TokenKeys::new("secret", 60);

    let user = create_user_with_password(db, "admin", "hunter22", true).await?;

    let service = AuthService::new(db, &keys);
    let pair = service.login("admin", "hunter22", CLIENT).await?;
    let authenticated = service.authenticate(&pair.access_token).await?;

    assert_eq!(authenticated.id, user.id);
    assert!(authenticated.admin);

    Ok(())
}

/// Tests that wrong passwords and unknown users are rejected alike.
///
/// Expected: Err(AuthError::InvalidCredentials) for both
#[tokio::test]
async fn login_rejects_bad_credentials() -> Result<(), AppError> {
    let test = TestBuilder::new().with_auth_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let keys = TokenKeys::new("secret", 60);

    create_user_with_password(db, "admin", "hunter22", true).await?;

    let service = AuthService::new(db, &keys);

    assert!(matches!(
        service.login("admin", "wrong", CLIENT).await,
        Err(AppError::AuthErr(AuthError::InvalidCredentials(_)))
    ));
    assert!(matches!(
        service.login("nobody", "hunter22", CLIENT).await,
        Err(AppError::AuthErr(AuthError::InvalidCredentials(_)))
    ));

    Ok(())
}

/// Tests that a malformed stored hash never matches.
///
/// Expected: Err(AuthError::InvalidCredentials)
#[tokio::test]
async fn login_rejects_malformed_hash() -> Result<(), AppError> {
    let test = TestBuilder::new().with_auth_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let keys = TokenKeys::new("secret", 60);

    factory::user::UserFactory::new(db)
        .username("legacy")
        .build()
        .await?;

    let result = AuthService::new(db, &keys)
        .login("legacy", "anything", CLIENT)
        .await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::InvalidCredentials(_)))
    ));

    Ok(())
}

/// Tests exchanging a refresh token, and that access tokens cannot be used to refresh.
///
/// Expected: Ok for the refresh token, Err(AuthError::InvalidToken) for the access token
#[tokio::test]
async fn refresh_accepts_only_refresh_tokens() -> Result<(), AppError> {
    let test = TestBuilder::new().with_auth_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let keys = TokenKeys::new("secret", 60);

    create_user_with_password(db, "admin", "hunter22", true).await?;

    let service = AuthService::new(db, &keys);
    let pair = service.login("admin", "hunter22", CLIENT).await?;
    let user = service.authenticate(&pair.access_token).await?;
    let refreshed = service.refresh(&pair.refresh_token).await?;
    assert_eq!(service.authenticate(&refreshed.access_token).await?.id, user.id);

    assert!(matches!(
        service.refresh(&pair.access_token).await,
        Err(AppError::AuthErr(AuthError::InvalidToken(_)))
    ));

    Ok(())
}

/// Tests that a signed refresh token never recorded in the database is refused.
///
/// Expected: Err(AuthError::InvalidToken)
#[tokio::test]
async fn refresh_rejects_unknown_token() -> Result<(), AppError> {
    let test = TestBuilder::new().with_auth_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let keys = TokenKeys::new("secret", 60);

    let user = factory::create_user(db).await?;
    let pair = keys.issue(user.id, user.admin, Utc::now())?;

    let result = AuthService::new(db, &keys).refresh(&pair.refresh_token).await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::InvalidToken(_)))
    ));

    Ok(())
}

/// Tests that refreshing rotates the token: the presented one cannot be used twice.
///
/// Expected: first refresh Ok, reuse Err(InvalidToken), the rotated token still works
#[tokio::test]
async fn refresh_rotates_token() -> Result<(), AppError> {
    let test = TestBuilder::new().with_auth_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let keys = TokenKeys::new("secret", 60);

    create_user_with_password(db, "admin", "hunter22", true).await?;

    let service = AuthService::new(db, &keys);
    let pair = service.login("admin", "hunter22", CLIENT).await?;
    let rotated = service.refresh(&pair.refresh_token).await?;

    assert!(matches!(
        service.refresh(&pair.refresh_token).await,
        Err(AppError::AuthErr(AuthError::InvalidToken(_)))
    ));
    assert!(service.refresh(&rotated.refresh_token).await.is_ok());

    Ok(())
}

/// Tests that a refresh token revoked on logout can no longer be exchanged.
///
/// Expected: logout revokes one token and the following refresh fails with InvalidToken
#[tokio::test]
async fn refresh_fails_after_logout_revokes_token() -> Result<(), AppError> {
    let test = TestBuilder::new().with_auth_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let keys = TokenKeys::new("secret", 60);

    create_user_with_password(db, "admin", "hunter22", true).await?;

    let service = AuthService::new(db, &keys);
    let pair = service.login("admin", "hunter22", CLIENT).await?;
    let user = service.authenticate(&pair.access_token).await?;

    assert_eq!(service.logout(&user, Some(&pair.refresh_token)).await?, 1);
    assert!(matches!(
        service.refresh(&pair.refresh_token).await,
        Err(AppError::AuthErr(AuthError::InvalidToken(_)))
    ));

    Ok(())
}

/// Tests logout without a token ends every session, and that another user's token is refused.
///
/// Expected: both sessions revoked; a foreign token yields InvalidToken
#[tokio::test]
async fn logout_without_token_revokes_all_sessions() -> Result<(), AppError> {
    let test = TestBuilder::new().with_auth_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let keys = TokenKeys::new("secret", 60);

    create_user_with_password(db, "admin", "hunter22", true).await?;
    create_user_with_password(db, "operator", "secret99", false).await?;

    let service = AuthService::new(db, &keys);
    let laptop = service.login("admin", "hunter22", CLIENT).await?;
    let phone = service.login("admin", "hunter22", "198.51.100.4").await?;
    let other = service.login("operator", "secret99", CLIENT).await?;
    let admin = service.authenticate(&laptop.access_token).await?;

    assert!(matches!(
        service.logout(&admin, Some(&other.refresh_token)).await,
        Err(AppError::AuthErr(AuthError::InvalidToken(_)))
    ));

    assert_eq!(service.logout(&admin, None).await?, 2);
    assert!(service.refresh(&laptop.refresh_token).await.is_err());
    assert!(service.refresh(&phone.refresh_token).await.is_err());
    assert!(service.refresh(&other.refresh_token).await.is_ok());

    Ok(())
}

/// Tests that the fifth wrong password locks the account.
///
/// Expected: five InvalidCredentials, then AccountLocked even for the right password
#[tokio::test]
async fn repeated_failures_lock_account() -> Result<(), AppError> {
    let test = TestBuilder::new().with_auth_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let keys = TokenKeys::new("secret", 60);

    create_user_with_password(db, "admin", "hunter22", true).await?;

    let service = AuthService::new(db, &keys);
    for _ in 0..MAX_FAILED_LOGINS {
        assert!(matches!(
            service.login("admin", "wrong", CLIENT).await,
            Err(AppError::AuthErr(AuthError::InvalidCredentials(_)))
        ));
    }

    let (username, until) = match service.login("admin", "hunter22", CLIENT).await {
        Err(AppError::AuthErr(AuthError::AccountLocked(username, until))) => (username, until),
        other => panic!("expected a locked account, got {:?}", other.map(|_| ())),
    };
    assert_eq!(username, "admin");
    assert!(until > Utc::now() + Duration::minutes(LOCKOUT_MINUTES - 1));

    let user = UserRepository::new(db).find_by_username("admin").await?.unwrap();
    assert_eq!(user.failed_attempts, MAX_FAILED_LOGINS);

    Ok(())
}

/// Tests that an expired lock lets the right password in and clears the counter.
///
/// Expected: Ok(TokenPair), failed_attempts back to 0 and no lock
#[tokio::test]
async fn expired_lock_allows_login_and_resets_counter() -> Result<(), AppError> {
    let test = TestBuilder::new().with_auth_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let keys = TokenKeys::new("secret", 60);

    let password_hash = hash_password("hunter22".to_string()).await?;
    factory::user::UserFactory::new(db)
        .username("admin")
        .password_hash(password_hash)
        .locked(MAX_FAILED_LOGINS, Utc::now() - Duration::minutes(1))
        .build()
        .await?;

    AuthService::new(db, &keys)
        .login("admin", "hunter22", CLIENT)
        .await?;

    let user = UserRepository::new(db).find_by_username("admin").await?.unwrap();
    assert_eq!(user.failed_attempts, 0);
    assert!(user.locked_until.is_none());

    Ok(())
}

/// Tests that a disabled account is refused after a correct password, and its tokens stop working.
///
/// Expected: Err(AuthError::AccountDisabled) from login and authenticate
#[tokio::test]
async fn disabled_account_is_refused() -> Result<(), AppError> {
    let test = TestBuilder::new().with_auth_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let keys = TokenKeys::new("secret", 60);

    let password_hash = hash_password("hunter22".to_string()).await?;
    let user = factory::user::UserFactory::new(db)
        .username("retired")
        .password_hash(password_hash)
        .is_active(false)
        .build()
        .await?;

    let service = AuthService::new(db, &keys);
    assert!(matches!(
        service.login("retired", "hunter22", CLIENT).await,
        Err(AppError::AuthErr(AuthError::AccountDisabled(_)))
    ));

    let pair = keys.issue(user.id, user.admin, Utc::now())?;
    assert!(matches!(
        service.authenticate(&pair.access_token).await,
        Err(AppError::AuthErr(AuthError::AccountDisabled(_)))
    ));

    Ok(())
}

/// Tests that every login attempt is recorded with its client address and outcome.
///
/// Expected: one failed and one successful row for "admin", one failed row for "ghost"
#[tokio::test]
async fn login_attempts_are_recorded() -> Result<(), AppError> {
    let test = TestBuilder::new().with_auth_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let keys = TokenKeys::new("secret", 60);

    create_user_with_password(db, "admin", "hunter22", true).await?;

    let service = AuthService::new(db, &keys);
    let _ = service.login("admin", "wrong", CLIENT).await;
    service.login("admin", "hunter22", CLIENT).await?;
    let _ = service.login("ghost", "anything", "198.51.100.4").await;

    let attempts = LoginAttemptRepository::new(db);
    let admin = attempts.recent_for_username("admin", 10).await?;
    assert_eq!(admin.len(), 2);
    assert!(admin[0].success);
    assert!(!admin[1].success);
    assert!(admin.iter().all(|a| a.ip_address == CLIENT));

    let ghost = attempts.recent_for_username("ghost", 10).await?;
    assert_eq!(ghost.len(), 1);
    assert!(!ghost[0].success);
    assert_eq!(ghost[0].ip_address, "198.51.100.4");

    Ok(())
}

/// Tests that tokens of a deleted user stop working.
///
/// Expected: Err(AuthError::UserNotInDatabase)
#[tokio::test]
async fn authenticate_rejects_missing_user() -> Result<(), AppError> {
    let test = TestBuilder::new().with_auth_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let keys = TokenKeys::new("secret", 60);

    let pair = keys.issue(999, true, Utc::now())?;

    let result = AuthService::new(db, &keys)
        .authenticate(&pair.access_token)
        .await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::UserNotInDatabase(999)))
    ));

    Ok(())
}

/// Tests bootstrap with no configured password.
///
/// Expected: Ok(Some(password)) that can log in, and a second call does nothing
#[tokio::test]
async fn bootstrap_generates_password_once() -> Result<(), AppError> {
    let test = TestBuilder::new().with_auth_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let keys = TokenKeys::new("secret", 60);

    let service = AuthService::new(db, &keys);
    let password = service.bootstrap_admin("admin", None).await?.unwrap();

    assert_eq!(password.len(), GENERATED_PASSWORD_LENGTH);
    assert!(service.login("admin", &password, CLIENT).await.is_ok());

    assert!(service.bootstrap_admin("admin", None).await?.is_none());
    assert_eq!(UserRepository::new(db).count().await?, 1);

    Ok(())
}

/// Tests bootstrap with a configured password.
///
/// Expected: Ok(None) and the configured password works
#[tokio::test]
async fn bootstrap_uses_configured_password() -> Result<(), AppError> {
    let test = TestBuilder::new().with_auth_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let keys = TokenKeys::new("secret", 60);

    let service = AuthService::new(db, &keys);
    let generated = service
        .bootstrap_admin("root", Some("configured".to_string()))
        .await?;

    assert!(generated.is_none());
    assert!(service.login("root", "configured", CLIENT).await.is_ok());

    Ok(())
}
