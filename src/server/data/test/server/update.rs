use super::*;

/// Tests renaming a server moves its events along with it.
///
/// Expected: Ok(Some) with the new IP, and the event now references the new IP
#[tokio::test]
async fn renames_server_and_keeps_events() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_server_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let server = factory::server::create_server_with_ip(db, "192.0.2.1").await?;
    factory::create_event(db, &server.ip, "online", Utc::now()).await?;

    let repo = ServerRepository::new(db);
    let updated = repo
        .update(UpdateServerParam {
            old_ip: "192.0.2.1".to_string(),
            new_ip: "192.0.2.2".to_string(),
            inbound_tag: "Renamed".to_string(),
        })
        .await?;

    let updated = updated.expect("server should exist after update");
    assert_eq!(updated.ip, "192.0.2.2");
    assert_eq!(updated.inbound_tag, "Renamed");

    assert!(repo.find_by_ip("192.0.2.1").await?.is_none());

    let events = entity::prelude::ServerEvent::find().all(db).await?;
    assert_eq!(events.len(), 1);
    assert_eq!(events[0].server_ip, "192.0.2.2");

    Ok(())
}

/// Tests updating an unknown server.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_missing_server() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_server_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = ServerRepository::new(db);
    let updated = repo
        .update(UpdateServerParam {
            old_ip: "198.51.100.1".to_string(),
            new_ip: "198.51.100.2".to_string(),
            inbound_tag: "Any".to_string(),
        })
        .await?;

    assert!(updated.is_none());

    Ok(())
}
