use super::*;

/// Tests recording an outage end with its duration.
///
/// Expected: Ok with the typed event returned
#[tokio::test]
async fn records_event_with_duration() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_server_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let server = factory::create_server(db).await?;
    let now = Utc::now();

    let repo = ServerEventRepository::new(db);
    let event = repo
        .create(CreateServerEventParam {
            server_ip: server.ip.clone(),
            event_type: EventType::OfflineEnd,
            event_time: now,
            duration_seconds: Some(125),
        })
        .await?;

    assert_eq!(event.server_ip, server.ip);
    assert_eq!(event.event_type, EventType::OfflineEnd);
    assert_eq!(event.duration_seconds, Some(125));

    Ok(())
}

/// Tests that events cannot reference an unregistered server.
///
/// Expected: Err from the foreign key constraint
#[tokio::test]
async fn rejects_event_for_unknown_server() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_server_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = ServerEventRepository::new(db);
    let result = repo
        .create(CreateServerEventParam {
            server_ip: "203.0.113.50".to_string(),
            event_type: EventType::Online,
            event_time: Utc::now(),
            duration_seconds: None,
        })
        .await;

    assert!(result.is_err());

    Ok(())
}
