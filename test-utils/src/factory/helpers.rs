//! Shared helper utilities for factory methods.

use chrono::{DateTime, Utc};
use sea_orm::{DatabaseConnection, DbErr};

/// Counter for generating unique IDs in tests.
static COUNTER: std::sync::atomic::AtomicU64 = std::sync::atomic::AtomicU64::new(1);

/// Gets the next unique counter value for test data.
///
/// # Returns
/// - `u64` - Next unique counter value
pub fn next_id() -> u64 {
    COUNTER.fetch_add(1, std::sync::atomic::Ordering::SeqCst)
}

/// Creates a server together with a sequence of events at the given instants.
///
/// # Arguments
/// - `db` - Database connection
/// - `events` - `(event_type, event_time)` pairs inserted in order
///
/// # Returns
/// - `Ok((server, events))` - Created server and its events
/// - `Err(DbErr)` - Database error during creation
pub async fn create_server_with_events(
    db: &DatabaseConnection,
    events: &[(&str, DateTime<Utc>)],
) -> Result<(entity::server::Model, Vec<entity::server_event::Model>), DbErr> {
    let server = crate::factory::server::create_server(db).await?;

    let mut created = Vec::with_capacity(events.len());
    for (event_type, event_time) in events {
        let event = crate::factory::server_event::ServerEventFactory::new(db, &server.ip)
            .event_type(*event_type)
            .event_time(*event_time)
            .build()
            .await?;
        created.push(event);
    }

    Ok((server, created))
}
