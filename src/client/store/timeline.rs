use chrono::{DateTime, Utc};

pub use crate::model::event::Period;
use crate::model::{event::ServerEventDto, server::ServerStatus};

/// Buckets a server's events into `segments` equal slices of `period` ending at `now`.
///
/// A slice takes the status of the latest event before its end. Slices with no such
/// event carry over the status the server had when the period started, which is decided
/// by the last event before the period or, failing that, `current_status`.
pub fn build_timeline(
    events: &[ServerEventDto],
    current_status: ServerStatus,
    period: Period,
    now: DateTime<Utc>,
    segments: usize,
) -> Vec<ServerStatus> {
    if segments == 0 {
        return vec![current_status];
    }

    let mut events: Vec<&ServerEventDto> = events.iter().collect();
    events.sort_by_key(|event| event.event_time);

    let start = period.start(now);
    let segment_ms = period.duration().num_milliseconds() as f64 / segments as f64;

    let mut status = events
        .iter()
        .filter(|event| event.event_time < start)
        .last()
        .map(|event| event.event_type.resulting_status())
        .unwrap_or(current_status);

    let start_ms = start.timestamp_millis() as f64;
    let mut pending = events.iter().peekable();
    let mut timeline = Vec::with_capacity(segments);

    for i in 0..segments {
        let segment_end = start_ms + (i + 1) as f64 * segment_ms;
        while let Some(event) =
            pending.next_if(|event| (event.event_time.timestamp_millis() as f64) < segment_end)
        {
            status = event.event_type.resulting_status();
        }
        timeline.push(status);
    }

    timeline
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::event::EventType;
    use chrono::{Duration, TimeZone};

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 6, 2, 12, 0, 0).unwrap()
    }

    fn event(hours_ago: i64, event_type: EventType) -> ServerEventDto {
        ServerEventDto {
            id: 0,
            server_ip: "10.0.0.1".to_string(),
            event_type,
            event_time: now() - Duration::hours(hours_ago),
            duration_seconds: None,
        }
    }

    #[test]
    fn no_events_uses_current_status() {
        let timeline = build_timeline(&[], ServerStatus::Unknown, Period::Day, now(), 24);
        assert_eq!(timeline, vec![ServerStatus::Unknown; 24]);
    }

    #[test]
    fn zero_segments_yields_current_status() {
        let timeline = build_timeline(&[], ServerStatus::Online, Period::Day, now(), 0);
        assert_eq!(timeline, vec![ServerStatus::Online]);
    }

    #[test]
    fn event_before_period_decides_initial_status() {
        let events = vec![event(30, EventType::OfflineStart)];

        let timeline = build_timeline(&events, ServerStatus::Online, Period::Day, now(), 24);

        assert_eq!(timeline, vec![ServerStatus::Offline; 24]);
    }

    #[test]
    fn outage_paints_segments_until_recovery() {
        // Events arrive unordered, as they do from the API.
        let events = vec![
            event(6, EventType::OfflineEnd),
            event(10, EventType::OfflineStart),
            event(30, EventType::Online),
        ];

        let timeline = build_timeline(&events, ServerStatus::Online, Period::Day, now(), 24);

        // Segment i spans [now - 24h + i h, now - 23h + i h).
        let offline: Vec<usize> = timeline
            .iter()
            .enumerate()
            .filter(|(_, status)| **status == ServerStatus::Offline)
            .map(|(i, _)| i)
            .collect();
        assert_eq!(offline, vec![14, 15, 16, 17]);
        assert_eq!(timeline[18], ServerStatus::Online);
        assert_eq!(timeline[0], ServerStatus::Online);
    }

    #[test]
    fn high_load_counts_as_online() {
        let events = vec![
            event(20, EventType::OfflineStart),
            event(12, EventType::HighLoad),
        ];

        let timeline = build_timeline(&events, ServerStatus::Unknown, Period::Day, now(), 24);

        assert_eq!(timeline[0], ServerStatus::Unknown);
        assert_eq!(timeline[4], ServerStatus::Offline);
        assert_eq!(timeline[12], ServerStatus::Online);
        assert_eq!(timeline[23], ServerStatus::Online);
    }

    #[test]
    fn week_period_uses_seven_hour_segments() {
        let events = vec![event(7, EventType::OfflineStart)];

        let timeline = build_timeline(&events, ServerStatus::Online, Period::Week, now(), 24);

        assert_eq!(timeline.len(), 24);
        assert_eq!(timeline[22], ServerStatus::Online);
        assert_eq!(timeline[23], ServerStatus::Offline);
    }
}
