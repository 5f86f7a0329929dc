//! Domain & parameter models for server status events.

use chrono::{DateTime, Utc};

use crate::{
    model::{
        event::{EventType, ServerEventDto, UptimeSummaryDto},
        server::ServerStatus,
    },
    server::error::AppError,
};

#[derive(Debug, Clone, PartialEq)]
pub struct ServerEvent {
    pub id: i32,
    pub server_ip: String,
    pub event_type: EventType,
    pub event_time: DateTime<Utc>,
    pub duration_seconds: Option<i64>,
}

impl ServerEvent {
    /// Converts an entity model to the event domain model
    ///
    /// # Returns
    /// - `Ok(ServerEvent)` - The converted event
    /// - `Err(AppError::InternalError)` - The stored event type is not recognised
    pub fn from_entity(entity: entity::server_event::Model) -> Result<Self, AppError> {
        let event_type = EventType::parse(&entity.event_type).ok_or_else(|| {
            AppError::InternalError(format!(
                "Unknown event type '{}' for event {}",
                entity.event_type, entity.id
            ))
        })?;

        Ok(Self {
            id: entity.id,
            server_ip: entity.server_ip,
            event_type,
            event_time: entity.event_time,
            duration_seconds: entity.duration_seconds,
        })
    }

    pub fn into_dto(self) -> ServerEventDto {
        ServerEventDto {
            id: self.id,
            server_ip: self.server_ip,
            event_type: self.event_type,
            event_time: self.event_time,
            duration_seconds: self.duration_seconds,
        }
    }
}

#[derive(Debug, Clone)]
pub struct CreateServerEventParam {
    pub server_ip: String,
    pub event_type: EventType,
    pub event_time: DateTime<Utc>,
    pub duration_seconds: Option<i64>,
}

/// Uptime aggregate for one server over a period.
#[derive(Debug, Clone, PartialEq)]
pub struct UptimeSummary {
    pub server_ip: String,
    pub uptime_percentage: f64,
    pub current_status: ServerStatus,
    pub last_status_change: Option<DateTime<Utc>>,
    pub total_events: u64,
}

impl UptimeSummary {
    pub fn into_dto(self) -> UptimeSummaryDto {
        UptimeSummaryDto {
            server_ip: self.server_ip,
            uptime_percentage: self.uptime_percentage,
            current_status: self.current_status,
            last_status_change: self.last_status_change,
            total_events: self.total_events,
        }
    }
}
