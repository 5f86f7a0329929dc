use super::*;

/// Tests finding the state-deciding event before a window starts.
///
/// Expected: Ok(Some) with the latest event older than the boundary
#[tokio::test]
async fn finds_latest_event_before_instant() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_server_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let now = Utc::now();
    let server = factory::create_server(db).await?;
    factory::create_event(db, &server.ip, "online", now - Duration::hours(50)).await?;
    factory::create_event(db, &server.ip, "offline_start", now - Duration::hours(30)).await?;
    factory::create_event(db, &server.ip, "offline_end", now - Duration::hours(2)).await?;

    let repo = ServerEventRepository::new(db);
    let event = repo
        .last_before(&server.ip, now - Duration::hours(24))
        .await?;

    assert_eq!(event.map(|e| e.event_type), Some(EventType::OfflineStart));

    let latest = repo.latest_for_server(&server.ip).await?;
    assert_eq!(latest.map(|e| e.event_type), Some(EventType::OfflineEnd));

    Ok(())
}

/// Tests a server without history.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_without_history() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_server_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let server = factory::create_server(db).await?;

    let repo = ServerEventRepository::new(db);

    assert!(repo.last_before(&server.ip, Utc::now()).await?.is_none());
    assert!(repo.latest_for_server(&server.ip).await?.is_none());

    Ok(())
}
