use chrono::Duration;
use test_utils::{builder::TestBuilder, factory};

use super::*;

fn event(event_type: EventType, event_time: DateTime<Utc>) -> ServerEvent {
    ServerEvent {
        id: 0,
        server_ip: "192.0.2.1".to_string(),
        event_type,
        event_time,
        duration_seconds: None,
    }
}

#[test]
fn no_events_keeps_initial_state() {
    let now = Utc::now();
    let start = now - Duration::hours(24);

    assert_eq!(uptime_percentage(true, &[], start, now), 100.0);
    assert_eq!(uptime_percentage(false, &[], start, now), 0.0);
}

#[test]
fn outage_reduces_uptime_proportionally() {
    let now = Utc::now();
    let start = now - Duration::hours(24);
    let events = vec![
        event(EventType::OfflineStart, start + Duration::hours(6)),
        event(EventType::OfflineEnd, start + Duration::hours(12)),
    ];

    assert_eq!(uptime_percentage(true, &events, start, now), 75.0);
}

#[test]
fn ongoing_outage_counts_until_now() {
    let now = Utc::now();
    let start = now - Duration::hours(10);
    let events = vec![event(EventType::OfflineStart, now - Duration::hours(1))];

    assert_eq!(uptime_percentage(true, &events, start, now), 90.0);
}

#[test]
fn offline_at_window_start_counts_until_recovery() {
    let now = Utc::now();
    let start = now - Duration::hours(4);
    let events = vec![event(EventType::OfflineEnd, start + Duration::hours(1))];

    assert_eq!(uptime_percentage(false, &events, start, now), 75.0);
}

#[test]
fn high_load_does_not_count_as_downtime() {
    let now = Utc::now();
    let start = now - Duration::hours(2);
    let events = vec![event(EventType::HighLoad, start + Duration::hours(1))];

    assert_eq!(uptime_percentage(true, &events, start, now), 100.0);
}

/// Tests the summary uses the install date as window start and the prior event as initial state.
///
/// Expected: Ok with uptime computed from the reduced window
#[tokio::test]
async fn summary_respects_install_date_and_prior_state() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_server_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let now = Utc::now();

    let fresh = factory::server::ServerFactory::new(db)
        .ip("192.0.2.1")
        .install_date(Some(now - Duration::hours(4)))
        .build()
        .await?;
    factory::create_event(db, &fresh.ip, "offline_start", now - Duration::hours(1)).await?;

    let old = factory::server::ServerFactory::new(db)
        .ip("192.0.2.2")
        .install_date(Some(now - Duration::days(10)))
        .build()
        .await?;
    factory::create_event(db, &old.ip, "offline_start", now - Duration::hours(30)).await?;
    factory::create_event(db, &old.ip, "offline_end", now - Duration::hours(18)).await?;

    let tracker = StatusTracker::new();
    let summaries = UptimeService::new(db, &tracker)
        .summary(Period::Day, now)
        .await?;

    let fresh_summary = summaries.iter().find(|s| s.server_ip == fresh.ip).unwrap();
    assert!((fresh_summary.uptime_percentage - 75.0).abs() < 0.05);
    assert_eq!(fresh_summary.current_status, ServerStatus::Offline);
    assert_eq!(fresh_summary.total_events, 1);

    let old_summary = summaries.iter().find(|s| s.server_ip == old.ip).unwrap();
    assert!((old_summary.uptime_percentage - 75.0).abs() < 0.05);
    assert_eq!(old_summary.current_status, ServerStatus::Online);
    assert_eq!(old_summary.total_events, 1);

    Ok(())
}

/// Tests the live tracker status wins over event history.
///
/// Expected: Ok with the tracker's status
#[tokio::test]
async fn summary_prefers_tracker_status() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_server_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let now = Utc::now();

    let server = factory::create_server_with_ip(db, "192.0.2.1").await?;
    let tracker = StatusTracker::new();
    tracker.observe(&server.ip, false, now).await;

    let summaries = UptimeService::new(db, &tracker)
        .summary(Period::Week, now)
        .await?;

    assert_eq!(summaries[0].current_status, ServerStatus::Offline);
    assert_eq!(summaries[0].last_status_change, None);

    Ok(())
}

/// Tests the event limit bounds.
///
/// Expected: Err(AppError::BadRequest) for 0 and 1001
#[tokio::test]
async fn events_rejects_out_of_range_limit() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_server_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let tracker = StatusTracker::new();
    let service = UptimeService::new(db, &tracker);

    for limit in [0, MAX_EVENTS_LIMIT + 1] {
        assert!(matches!(
            service.events(Period::Day, None, limit, Utc::now()).await,
            Err(AppError::BadRequest(_))
        ));
    }

    assert!(service
        .events(Period::Day, None, 20, Utc::now())
        .await?
        .is_empty());

    Ok(())
}
