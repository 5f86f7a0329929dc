use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

#[cfg(feature = "server")]
use utoipa::ToSchema;

use crate::model::server::ServerStatus;

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "server", derive(ToSchema))]
#[serde(rename_all = "snake_case")]
pub enum EventType {
    Online,
    OfflineStart,
    OfflineEnd,
    HighLoad,
}

impl EventType {
    pub fn as_str(&self) -> &'static str {
        match self {
            EventType::Online => "online",
            EventType::OfflineStart => "offline_start",
            EventType::OfflineEnd => "offline_end",
            EventType::HighLoad => "high_load",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "online" => Some(EventType::Online),
            "offline_start" => Some(EventType::OfflineStart),
            "offline_end" => Some(EventType::OfflineEnd),
            "high_load" => Some(EventType::HighLoad),
            _ => None,
        }
    }

    /// Status a server is in right after this event.
    ///
    /// Only `offline_start` takes a server down; every other event means it answered.
    pub fn resulting_status(&self) -> ServerStatus {
        match self {
            EventType::OfflineStart => ServerStatus::Offline,
            _ => ServerStatus::Online,
        }
    }
}

/// Look-back window for uptime and event queries.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "server", derive(ToSchema))]
pub enum Period {
    #[default]
    #[serde(rename = "24h")]
    Day,
    #[serde(rename = "7d")]
    Week,
    #[serde(rename = "30d")]
    Month,
}

impl Period {
    pub const ALL: [Period; 3] = [Period::Day, Period::Week, Period::Month];

    pub fn as_str(&self) -> &'static str {
        match self {
            Period::Day => "24h",
            Period::Week => "7d",
            Period::Month => "30d",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        Period::ALL.into_iter().find(|p| p.as_str() == value)
    }

    pub fn hours(&self) -> i64 {
        match self {
            Period::Day => 24,
            Period::Week => 168,
            Period::Month => 720,
        }
    }

    pub fn duration(&self) -> Duration {
        Duration::hours(self.hours())
    }

    pub fn start(&self, now: DateTime<Utc>) -> DateTime<Utc> {
        now - self.duration()
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "server", derive(ToSchema))]
pub struct ServerEventDto {
    pub id: i32,
    pub server_ip: String,
    pub event_type: EventType,
    pub event_time: DateTime<Utc>,
    pub duration_seconds: Option<i64>,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "server", derive(ToSchema))]
pub struct ServerEventsDto {
    pub events: Vec<ServerEventDto>,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "server", derive(ToSchema))]
pub struct UptimeSummaryDto {
    pub server_ip: String,
    pub uptime_percentage: f64,
    pub current_status: ServerStatus,
    pub last_status_change: Option<DateTime<Utc>>,
    pub total_events: u64,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "server", derive(ToSchema))]
pub struct UptimeSummaryListDto {
    pub data: Vec<UptimeSummaryDto>,
}
