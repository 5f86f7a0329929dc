//! Uptime aggregation over event history.

use chrono::{DateTime, Utc};
use sea_orm::DatabaseConnection;

use crate::{
    model::{
        event::{EventType, Period},
        server::ServerStatus,
    },
    server::{
        data::{server::ServerRepository, server_event::ServerEventRepository},
        error::AppError,
        model::event::{ServerEvent, UptimeSummary},
        service::status::StatusTracker,
    },
};

pub const MAX_EVENTS_LIMIT: u64 = 1000;

/// Percentage of `[window_start, now)` during which the server was not offline.
///
/// `events` must be ordered oldest first. Events before `window_start` are treated as
/// happening at the window start. The result is rounded to two decimals.
pub fn uptime_percentage(
    initially_online: bool,
    events: &[ServerEvent],
    window_start: DateTime<Utc>,
    now: DateTime<Utc>,
) -> f64 {
    let total = (now - window_start).num_milliseconds();
    if total <= 0 {
        return if initially_online { 100.0 } else { 0.0 };
    }

    let mut online = initially_online;
    let mut cursor = window_start;
    let mut offline_ms = 0i64;

    for event in events {
        let at = event.event_time.clamp(window_start, now);

        if !online {
            offline_ms += (at - cursor).num_milliseconds();
        }

        cursor = at;
        online = event.event_type.resulting_status() == ServerStatus::Online;
    }

    if !online {
        offline_ms += (now - cursor).num_milliseconds();
    }

    let pct = (total - offline_ms) as f64 / total as f64 * 100.0;

    (pct.clamp(0.0, 100.0) * 100.0).round() / 100.0
}

pub struct UptimeService<'a> {
    db: &'a DatabaseConnection,
    tracker: &'a StatusTracker,
}

impl<'a> UptimeService<'a> {
    pub fn new(db: &'a DatabaseConnection, tracker: &'a StatusTracker) -> Self {
        Self { db, tracker }
    }

    /// Builds one uptime summary per registered server.
    ///
    /// The window starts at the period start or the install date, whichever is later.
    /// The state at window start comes from the last earlier event, defaulting to online.
    /// Current status prefers the live tracker and falls back to the latest event.
    pub async fn summary(
        &self,
        period: Period,
        now: DateTime<Utc>,
    ) -> Result<Vec<UptimeSummary>, AppError> {
        let servers = ServerRepository::new(self.db).get_all().await?;
        let event_repo = ServerEventRepository::new(self.db);
        let period_start = period.start(now);

        let mut summaries = Vec::with_capacity(servers.len());
        for server in servers {
            let window_start = server
                .install_date
                .map_or(period_start, |installed| installed.max(period_start));

            let initially_online = event_repo
                .last_before(&server.ip, window_start)
                .await?
                .map_or(true, |e| e.event_type.resulting_status() == ServerStatus::Online);

            let events = event_repo
                .get_for_server_since(&server.ip, window_start)
                .await?;

            let latest_change = event_repo
                .latest_for_server(&server.ip)
                .await?
                .filter(|e| e.event_type != EventType::HighLoad);

            let current_status = match self.tracker.status_of(&server.ip).await {
                ServerStatus::Unknown => latest_change
                    .as_ref()
                    .map(|e| e.event_type.resulting_status())
                    .unwrap_or_default(),
                status => status,
            };

            summaries.push(UptimeSummary {
                uptime_percentage: uptime_percentage(initially_online, &events, window_start, now),
                current_status,
                last_status_change: latest_change.map(|e| e.event_time),
                total_events: events.len() as u64,
                server_ip: server.ip,
            });
        }

        Ok(summaries)
    }

    /// Gets events within the period, newest first.
    ///
    /// # Returns
    /// - `Ok(Vec<ServerEvent>)` - At most `limit` events
    /// - `Err(AppError::BadRequest)` - `limit` outside 1..=1000
    pub async fn events(
        &self,
        period: Period,
        server_ip: Option<&str>,
        limit: u64,
        now: DateTime<Utc>,
    ) -> Result<Vec<ServerEvent>, AppError> {
        if !(1..=MAX_EVENTS_LIMIT).contains(&limit) {
            return Err(AppError::BadRequest(format!(
                "Limit must be between 1 and {}",
                MAX_EVENTS_LIMIT
            )));
        }

        ServerEventRepository::new(self.db)
            .get_since(period.start(now), server_ip, limit)
            .await
    }
}

#[cfg(test)]
mod test;
