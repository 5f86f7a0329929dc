//! Server event factory for creating test status events.

use chrono::{DateTime, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating server events.
///
/// Defaults to an `online` event at the current instant without a duration.
pub struct ServerEventFactory<'a> {
    db: &'a DatabaseConnection,
    server_ip: String,
    event_type: String,
    event_time: DateTime<Utc>,
    duration_seconds: Option<i64>,
}

impl<'a> ServerEventFactory<'a> {
    pub fn new(db: &'a DatabaseConnection, server_ip: &str) -> Self {
        Self {
            db,
            server_ip: server_ip.to_string(),
            event_type: "online".to_string(),
            event_time: Utc::now(),
            duration_seconds: None,
        }
    }

    pub fn event_type(mut self, event_type: impl Into<String>) -> Self {
        self.event_type = event_type.into();
        self
    }

    pub fn event_time(mut self, event_time: DateTime<Utc>) -> Self {
        self.event_time = event_time;
        self
    }

    pub fn duration_seconds(mut self, duration_seconds: i64) -> Self {
        self.duration_seconds = Some(duration_seconds);
        self
    }

    /// Builds and inserts the event.
    ///
    /// # Returns
    /// - `Ok(entity::server_event::Model)` - Created event
    /// - `Err(DbErr)` - Database error during insert (e.g. unknown server IP)
    pub async fn build(self) -> Result<entity::server_event::Model, DbErr> {
        entity::server_event::ActiveModel {
            server_ip: ActiveValue::Set(self.server_ip),
            event_type: ActiveValue::Set(self.event_type),
            event_time: ActiveValue::Set(self.event_time),
            duration_seconds: ActiveValue::Set(self.duration_seconds),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates an event of the given type at the given instant.
pub async fn create_event(
    db: &DatabaseConnection,
    server_ip: &str,
    event_type: &str,
    event_time: DateTime<Utc>,
) -> Result<entity::server_event::Model, DbErr> {
    ServerEventFactory::new(db, server_ip)
        .event_type(event_type)
        .event_time(event_time)
        .build()
        .await
}
