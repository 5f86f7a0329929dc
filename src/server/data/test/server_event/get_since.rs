use super::*;

/// Tests that only events inside the window are returned, newest first.
///
/// Expected: Ok with the two recent events in descending order
#[tokio::test]
async fn returns_recent_events_newest_first() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_server_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let now = Utc::now();
    let server = factory::create_server(db).await?;
    factory::create_event(db, &server.ip, "online", now - Duration::hours(30)).await?;
    factory::create_event(db, &server.ip, "offline_start", now - Duration::hours(5)).await?;
    factory::create_event(db, &server.ip, "offline_end", now - Duration::hours(4)).await?;

    let repo = ServerEventRepository::new(db);
    let events = repo.get_since(now - Duration::hours(24), None, 100).await?;

    assert_eq!(events.len(), 2);
    assert_eq!(events[0].event_type, EventType::OfflineEnd);
    assert_eq!(events[1].event_type, EventType::OfflineStart);

    Ok(())
}

/// Tests the server filter and the limit.
///
/// Expected: Ok with only the requested server's newest event
#[tokio::test]
async fn filters_by_server_and_applies_limit() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_server_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let now = Utc::now();
    let first = factory::create_server(db).await?;
    let second = factory::create_server(db).await?;
    factory::create_event(db, &first.ip, "online", now - Duration::hours(3)).await?;
    factory::create_event(db, &first.ip, "offline_start", now - Duration::hours(2)).await?;
    factory::create_event(db, &second.ip, "online", now - Duration::hours(1)).await?;

    let repo = ServerEventRepository::new(db);
    let events = repo
        .get_since(now - Duration::hours(24), Some(&first.ip), 1)
        .await?;

    assert_eq!(events.len(), 1);
    assert_eq!(events[0].server_ip, first.ip);
    assert_eq!(events[0].event_type, EventType::OfflineStart);

    Ok(())
}
