use entity::prelude::LoginAttempt;
use sea_orm::DbErr;
use test_utils::builder::TestBuilder;

use crate::server::data::login_attempt::LoginAttemptRepository;

/// Tests recording attempts and reading them back newest first.
///
/// Expected: only the requested username, newest first, capped by the limit
#[tokio::test]
async fn records_and_lists_attempts() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(LoginAttempt)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = LoginAttemptRepository::new(db);
    repo.record("admin", "192.0.2.10", false).await?;
    repo.record("admin", "192.0.2.10", false).await?;
    repo.record("admin", "192.0.2.11", true).await?;
    repo.record("operator", "192.0.2.10", true).await?;

    let recent = repo.recent_for_username("admin", 2).await?;

    assert_eq!(recent.len(), 2);
    assert!(recent[0].success);
    assert_eq!(recent[0].ip_address, "192.0.2.11");
    assert!(!recent[1].success);
    assert!(recent.iter().all(|a| a.username == "admin"));

    Ok(())
}
