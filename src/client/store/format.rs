use std::fmt::Display;

use chrono::{DateTime, Datelike, Local, TimeZone, Utc};

use crate::model::server::ServerStatus;

const EMPTY_DATE: &str = "—";

/// Install date as shown in the server table, `dd.mm.yy HH:MM` in the browser's local time.
///
/// Servers registered before install dates were tracked carry the year-1 sentinel.
pub fn format_install_date(date: Option<DateTime<Utc>>) -> String {
    format_install_date_in(date, &Local)
}

pub fn format_install_date_in<Tz>(date: Option<DateTime<Utc>>, tz: &Tz) -> String
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    match date {
        Some(date) if date.year() > 1 => date
            .with_timezone(tz)
            .format("%d.%m.%y %H:%M")
            .to_string(),
        _ => EMPTY_DATE.to_string(),
    }
}

/// Relative timestamp, `short` for card footers and the long form for the activity feed.
pub fn format_relative(date: DateTime<Utc>, now: DateTime<Utc>, short: bool) -> String {
    let minutes = (now - date).num_minutes().max(0);
    let hours = minutes / 60;
    let days = hours / 24;

    if short {
        if minutes < 1 {
            "just now".to_string()
        } else if minutes < 60 {
            format!("{}m", minutes)
        } else if hours < 24 {
            format!("{}h", hours)
        } else if days < 7 {
            format!("{}d", days)
        } else {
            date.format("%-d %b").to_string()
        }
    } else if minutes < 1 {
        "Just now".to_string()
    } else if minutes < 60 {
        format!("{} min ago", minutes)
    } else if hours < 24 {
        format!("{} h {} min ago", hours, minutes % 60)
    } else {
        date.format("%b %-d, %Y %H:%M").to_string()
    }
}

/// Human duration such as `1d 2h 5m`; `short` keeps the two largest parts.
pub fn format_duration(total_seconds: i64, short: bool) -> String {
    if total_seconds < 0 {
        return "N/A".to_string();
    }
    if total_seconds == 0 {
        return "0s".to_string();
    }

    let days = total_seconds / 86_400;
    let hours = (total_seconds % 86_400) / 3600;
    let minutes = (total_seconds % 3600) / 60;
    let seconds = total_seconds % 60;

    let mut parts = Vec::new();
    if days > 0 {
        parts.push(format!("{}d", days));
    }
    if hours > 0 {
        parts.push(format!("{}h", hours));
    }
    if minutes > 0 {
        parts.push(format!("{}m", minutes));
    }
    if seconds > 0 || parts.is_empty() {
        parts.push(format!("{}s", seconds));
    }

    if short {
        parts.truncate(2);
    }
    parts.join(" ")
}

pub fn status_text(status: ServerStatus) -> &'static str {
    match status {
        ServerStatus::Online => "Online",
        ServerStatus::Offline => "Offline",
        ServerStatus::Unknown => "Unknown",
    }
}
