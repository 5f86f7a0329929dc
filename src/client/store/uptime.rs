use std::collections::HashMap;

use crate::{
    client::store::format::format_duration,
    model::{
        event::{EventType, ServerEventDto, UptimeSummaryDto},
        server::{ServerDto, ServerStatus},
    },
};

pub const EVENT_LIMIT_CHOICES: [usize; 3] = [10, 20, 50];
pub const DEFAULT_EVENT_LIMIT: usize = 20;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum UptimeFilter {
    #[default]
    All,
    Active,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum UptimeClass {
    Low,
    Medium,
    High,
}

impl UptimeClass {
    pub fn as_str(&self) -> &'static str {
        match self {
            UptimeClass::Low => "low",
            UptimeClass::Medium => "medium",
            UptimeClass::High => "high",
        }
    }
}

pub fn uptime_class(percentage: f64) -> UptimeClass {
    if percentage < 80.0 {
        UptimeClass::Low
    } else if percentage < 95.0 {
        UptimeClass::Medium
    } else {
        UptimeClass::High
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct UptimeCard {
    pub summary: UptimeSummaryDto,
    pub inbound_tag: Option<String>,
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct UptimeOverview {
    pub total: usize,
    pub online: usize,
    pub average_uptime: f64,
}

/// Data and view filters of the uptime page.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct UptimeDashboard {
    cards: Vec<UptimeCard>,
    events: Vec<ServerEventDto>,
    pub filter: UptimeFilter,
    pub search: String,
}

impl UptimeDashboard {
    pub fn new(
        summaries: Vec<UptimeSummaryDto>,
        events: Vec<ServerEventDto>,
        servers: Vec<ServerDto>,
    ) -> Self {
        let tags: HashMap<String, String> = servers
            .into_iter()
            .map(|server| (server.ip, server.inbound_tag))
            .collect();

        let cards = summaries
            .into_iter()
            .map(|summary| UptimeCard {
                inbound_tag: tags.get(&summary.server_ip).cloned(),
                summary,
            })
            .collect();

        Self {
            cards,
            events,
            filter: UptimeFilter::default(),
            search: String::new(),
        }
    }

    pub fn events(&self) -> &[ServerEventDto] {
        &self.events
    }

    pub fn events_for(&self, ip: &str) -> Vec<ServerEventDto> {
        self.events
            .iter()
            .filter(|event| event.server_ip == ip)
            .cloned()
            .collect()
    }

    /// Offline servers first so problems surface at the top of the grid.
    pub fn visible_cards(&self) -> Vec<&UptimeCard> {
        let needle = self.search.trim().to_lowercase();

        let mut cards: Vec<&UptimeCard> = self
            .cards
            .iter()
            .filter(|card| match self.filter {
                UptimeFilter::All => true,
                UptimeFilter::Active => card.summary.current_status == ServerStatus::Online,
            })
            .filter(|card| {
                needle.is_empty()
                    || card.summary.server_ip.to_lowercase().contains(&needle)
                    || card
                        .inbound_tag
                        .as_ref()
                        .is_some_and(|tag| tag.to_lowercase().contains(&needle))
            })
            .collect();

        cards.sort_by(|a, b| {
            status_rank(a.summary.current_status)
                .cmp(&status_rank(b.summary.current_status))
                .then_with(|| a.summary.server_ip.cmp(&b.summary.server_ip))
        });
        cards
    }

    pub fn overview(&self) -> UptimeOverview {
        let total = self.cards.len();
        let online = self
            .cards
            .iter()
            .filter(|card| card.summary.current_status == ServerStatus::Online)
            .count();
        let average_uptime = if total == 0 {
            0.0
        } else {
            self.cards
                .iter()
                .map(|card| card.summary.uptime_percentage)
                .sum::<f64>()
                / total as f64
        };

        UptimeOverview {
            total,
            online,
            average_uptime,
        }
    }

    pub fn recent_events(&self, limit: usize) -> Vec<&ServerEventDto> {
        let mut events: Vec<&ServerEventDto> = self.events.iter().collect();
        events.sort_by(|a, b| b.event_time.cmp(&a.event_time));
        events.truncate(limit);
        events
    }
}

fn status_rank(status: ServerStatus) -> u8 {
    match status {
        ServerStatus::Offline => 0,
        ServerStatus::Unknown => 1,
        ServerStatus::Online => 2,
    }
}

pub fn describe_event(event: &ServerEventDto) -> String {
    let ip = &event.server_ip;
    match event.event_type {
        EventType::Online => format!("Server {} connected.", ip),
        EventType::OfflineStart => format!("Lost connection to {}.", ip),
        EventType::OfflineEnd => match event.duration_seconds {
            Some(seconds) if seconds > 0 => format!(
                "{} is back online. (down for {})",
                ip,
                format_duration(seconds, false)
            ),
            _ => format!("{} is back online.", ip),
        },
        EventType::HighLoad => format!("High load on {}.", ip),
    }
}

/// Icon tone for an activity feed entry.
pub fn event_tone(event_type: EventType) -> &'static str {
    match event_type {
        EventType::Online | EventType::OfflineEnd => "success",
        EventType::OfflineStart | EventType::HighLoad => "warning",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone, Utc};

    fn summary(ip: &str, pct: f64, status: ServerStatus) -> UptimeSummaryDto {
        UptimeSummaryDto {
            server_ip: ip.to_string(),
            uptime_percentage: pct,
            current_status: status,
            last_status_change: None,
            total_events: 0,
        }
    }

    fn event(ip: &str, minutes_ago: i64, event_type: EventType) -> ServerEventDto {
        let now = Utc.with_ymd_and_hms(2024, 6, 2, 12, 0, 0).unwrap();
        ServerEventDto {
            id: minutes_ago as i32,
            server_ip: ip.to_string(),
            event_type,
            event_time: now - Duration::minutes(minutes_ago),
            duration_seconds: None,
        }
    }

    fn dashboard() -> UptimeDashboard {
        UptimeDashboard::new(
            vec![
                summary("10.0.0.3", 100.0, ServerStatus::Online),
                summary("10.0.0.1", 50.0, ServerStatus::Offline),
                summary("10.0.0.2", 90.0, ServerStatus::Unknown),
                summary("10.0.0.0", 99.0, ServerStatus::Online),
            ],
            vec![
                event("10.0.0.1", 30, EventType::OfflineStart),
                event("10.0.0.3", 5, EventType::Online),
                event("10.0.0.1", 60, EventType::Online),
            ],
            vec![ServerDto {
                ip: "10.0.0.3".to_string(),
                inbound_tag: "Finland".to_string(),
                install_date: None,
            }],
        )
    }

    fn ips(cards: Vec<&UptimeCard>) -> Vec<&str> {
        cards
            .into_iter()
            .map(|card| card.summary.server_ip.as_str())
            .collect()
    }

    #[test]
    fn cards_order_offline_unknown_online_then_ip() {
        let dashboard = dashboard();
        assert_eq!(
            ips(dashboard.visible_cards()),
            vec!["10.0.0.1", "10.0.0.2", "10.0.0.0", "10.0.0.3"]
        );
    }

    #[test]
    fn active_filter_keeps_online_servers() {
        let mut dashboard = dashboard();
        dashboard.filter = UptimeFilter::Active;
        assert_eq!(ips(dashboard.visible_cards()), vec!["10.0.0.0", "10.0.0.3"]);
    }

    #[test]
    fn search_matches_ip_and_inbound_tag() {
        let mut dashboard = dashboard();

        dashboard.search = "FINLAND".to_string();
        assert_eq!(ips(dashboard.visible_cards()), vec!["10.0.0.3"]);

        dashboard.search = "0.0.2".to_string();
        assert_eq!(ips(dashboard.visible_cards()), vec!["10.0.0.2"]);
    }

    #[test]
    fn missing_server_leaves_tag_empty() {
        let dashboard = dashboard();
        let card = dashboard
            .visible_cards()
            .into_iter()
            .find(|card| card.summary.server_ip == "10.0.0.1")
            .unwrap();
        assert_eq!(card.inbound_tag, None);
    }

    #[test]
    fn overview_averages_uptime() {
        let overview = dashboard().overview();
        assert_eq!(overview.total, 4);
        assert_eq!(overview.online, 2);
        assert!((overview.average_uptime - 84.75).abs() < f64::EPSILON);
    }

    #[test]
    fn overview_of_empty_dashboard_is_zero() {
        let overview = UptimeDashboard::default().overview();
        assert_eq!(overview, UptimeOverview::default());
    }

    #[test]
    fn uptime_class_thresholds() {
        assert_eq!(uptime_class(79.99), UptimeClass::Low);
        assert_eq!(uptime_class(80.0), UptimeClass::Medium);
        assert_eq!(uptime_class(94.9), UptimeClass::Medium);
        assert_eq!(uptime_class(95.0), UptimeClass::High);
    }

    #[test]
    fn recent_events_are_newest_first_and_truncated() {
        let dashboard = dashboard();
        let recent: Vec<i32> = dashboard
            .recent_events(2)
            .into_iter()
            .map(|event| event.id)
            .collect();
        assert_eq!(recent, vec![5, 30]);
    }

    #[test]
    fn events_for_filters_by_server() {
        assert_eq!(dashboard().events_for("10.0.0.1").len(), 2);
    }

    #[test]
    fn describe_offline_end_mentions_downtime() {
        let mut event = event("10.0.0.1", 1, EventType::OfflineEnd);
        assert_eq!(describe_event(&event), "10.0.0.1 is back online.");

        event.duration_seconds = Some(125);
        assert_eq!(
            describe_event(&event),
            "10.0.0.1 is back online. (down for 2m 5s)"
        );
    }

    #[test]
    fn describe_other_events() {
        assert_eq!(
            describe_event(&event("1.1.1.1", 1, EventType::OfflineStart)),
            "Lost connection to 1.1.1.1."
        );
        assert_eq!(
            describe_event(&event("1.1.1.1", 1, EventType::HighLoad)),
            "High load on 1.1.1.1."
        );
    }
}
