use super::*;

/// Tests deleting a server removes its events.
///
/// Expected: Ok(true) and no events left for the server
#[tokio::test]
async fn deletes_server_and_its_events() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_server_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let server = factory::create_server(db).await?;
    let other = factory::create_server(db).await?;
    factory::create_event(db, &server.ip, "offline_start", Utc::now()).await?;
    factory::create_event(db, &other.ip, "online", Utc::now()).await?;

    let repo = ServerRepository::new(db);
    let deleted = repo.delete(&server.ip).await?;

    assert!(deleted);
    assert!(repo.find_by_ip(&server.ip).await?.is_none());

    let events = entity::prelude::ServerEvent::find().all(db).await?;
    assert_eq!(events.len(), 1);
    assert_eq!(events[0].server_ip, other.ip);

    Ok(())
}

/// Tests deleting an IP that is not registered.
///
/// Expected: Ok(false)
#[tokio::test]
async fn returns_false_for_missing_server() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_server_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = ServerRepository::new(db);

    assert!(!repo.delete("203.0.113.9").await?);

    Ok(())
}
