use crate::server::{data::user::UserRepository, model::user::CreateUserParam};
use chrono::{Duration, Utc};
use entity::prelude::User;
use sea_orm::{DbErr, EntityTrait};
use test_utils::{builder::TestBuilder, factory};

/// Tests creating and finding a user by username.
///
/// Expected: Ok with the same user returned by both lookups
#[tokio::test]
async fn creates_and_finds_user() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_table(User).build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);
    let created = repo
        .create(CreateUserParam {
            username: "operator".to_string(),
            password_hash: "hash".to_string(),
            admin: true,
        })
        .await?;

    let by_name = repo.find_by_username("operator").await?.unwrap();
    let by_id = repo.find_by_id(created.id).await?.unwrap();

    assert_eq!(by_name.id, created.id);
    assert_eq!(by_id.username, "operator");
    assert!(by_id.admin);

    Ok(())
}

/// Tests duplicate usernames are rejected.
///
/// Expected: Err from the unique constraint
#[tokio::test]
async fn rejects_duplicate_username() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_table(User).build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    factory::user::UserFactory::new(db)
        .username("operator")
        .build()
        .await?;

    let repo = UserRepository::new(db);
    let result = repo
        .create(CreateUserParam {
            username: "operator".to_string(),
            password_hash: "hash".to_string(),
            admin: false,
        })
        .await;

    assert!(result.is_err());
    assert_eq!(repo.count().await?, 1);

    Ok(())
}

/// Tests that failures accumulate and the configured count locks the account.
///
/// Expected: no lock after 2 failures, lock expiry of now + 30 min on the third
#[tokio::test]
async fn failed_logins_lock_at_threshold() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_table(User).build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let now = Utc::now();

    let user = factory::create_user(db).await?;
    let repo = UserRepository::new(db);

    for expected in 1..=2 {
        let updated = repo
            .record_failed_login(user.id, 3, Duration::minutes(30), now)
            .await?
            .unwrap();
        assert_eq!(updated.failed_attempts, expected);
        assert!(updated.locked_until.is_none());
    }

    let locked = repo
        .record_failed_login(user.id, 3, Duration::minutes(30), now)
        .await?
        .unwrap();
    assert_eq!(locked.failed_attempts, 3);
    assert_eq!(
        locked.locked_at(now).map(|until| until.timestamp()),
        Some((now + Duration::minutes(30)).timestamp())
    );
    assert_eq!(locked.locked_at(now + Duration::minutes(31)), None);

    assert!(repo
        .record_failed_login(999, 3, Duration::minutes(30), now)
        .await?
        .is_none());

    Ok(())
}

/// Tests that a successful login clears the counter and the lock.
///
/// Expected: failed_attempts 0, locked_until None, last_login set
#[tokio::test]
async fn successful_login_resets_lockout() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_table(User).build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let now = Utc::now();

    let user = factory::user::UserFactory::new(db)
        .locked(5, now + Duration::minutes(10))
        .build()
        .await?;

    let repo = UserRepository::new(db);
    repo.record_successful_login(user.id, now).await?;

    let user = repo.find_by_id(user.id).await?.unwrap();
    assert_eq!(user.failed_attempts, 0);
    assert!(user.locked_until.is_none());

    let stored = entity::prelude::User::find_by_id(user.id)
        .one(db)
        .await?
        .unwrap();
    assert_eq!(
        stored.last_login.map(|at| at.timestamp()),
        Some(now.timestamp())
    );

    Ok(())
}
