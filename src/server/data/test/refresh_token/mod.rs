use chrono::{Duration, Utc};
use entity::prelude::{RefreshToken, User};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

use crate::server::data::refresh_token::RefreshTokenRepository;

/// Tests that a stored token is found until it is revoked.
///
/// Expected: find_active returns the token, revoke returns true once, then find_active is None
#[tokio::test]
async fn revoked_token_is_no_longer_active() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(User)
        .with_table(RefreshToken)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let now = Utc::now();

    let user = factory::create_user(db).await?;
    let repo = RefreshTokenRepository::new(db);
    let stored = repo.create(user.id, "jti-1", now + Duration::days(7)).await?;

    let found = repo.find_active(user.id, "jti-1", now).await?.unwrap();
    assert_eq!(found.id, stored.id);
    assert!(!found.revoked);

    assert!(repo.revoke(user.id, "jti-1").await?);
    assert!(!repo.revoke(user.id, "jti-1").await?);
    assert!(repo.find_active(user.id, "jti-1", now).await?.is_none());

    Ok(())
}

/// Tests that expired, unknown and foreign tokens are never active.
///
/// Expected: None in every case
#[tokio::test]
async fn expired_unknown_and_foreign_tokens_are_inactive() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_auth_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let now = Utc::now();

    let owner = factory::create_user(db).await?;
    let other = factory::create_user(db).await?;
    let repo = RefreshTokenRepository::new(db);
    repo.create(owner.id, "expired", now - Duration::minutes(1)).await?;
    repo.create(owner.id, "live", now + Duration::days(1)).await?;

    assert!(repo.find_active(owner.id, "expired", now).await?.is_none());
    assert!(repo.find_active(owner.id, "missing", now).await?.is_none());
    assert!(repo.find_active(other.id, "live", now).await?.is_none());
    assert!(!repo.revoke(other.id, "live").await?);
    assert!(repo.find_active(owner.id, "live", now).await?.is_some());

    Ok(())
}

/// Tests revoking every token of one user.
///
/// Expected: count of the user's unrevoked tokens; other users untouched
#[tokio::test]
async fn revokes_all_tokens_of_user() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_auth_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let now = Utc::now();
    let expires = now + Duration::days(7);

    let user = factory::create_user(db).await?;
    let other = factory::create_user(db).await?;
    let repo = RefreshTokenRepository::new(db);
    repo.create(user.id, "a", expires).await?;
    repo.create(user.id, "b", expires).await?;
    repo.create(user.id, "c", expires).await?;
    repo.create(other.id, "d", expires).await?;
    repo.revoke(user.id, "c").await?;

    assert_eq!(repo.revoke_all_for_user(user.id).await?, 2);
    assert!(repo.find_active(user.id, "a", now).await?.is_none());
    assert!(repo.find_active(other.id, "d", now).await?.is_some());

    Ok(())
}

/// Tests that token ids are unique.
///
/// Expected: Err on the second insert
#[tokio::test]
async fn rejects_duplicate_token_id() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_auth_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let repo = RefreshTokenRepository::new(db);
    let expires = Utc::now() + Duration::days(7);

    repo.create(user.id, "same", expires).await?;
    assert!(repo.create(user.id, "same", expires).await.is_err());

    Ok(())
}
