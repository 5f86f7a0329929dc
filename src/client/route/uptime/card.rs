use chrono::{DateTime, Utc};
use dioxus::prelude::*;

use crate::{
    client::{
        constant::TIMELINE_SEGMENTS,
        store::{
            format::{format_relative, status_text},
            timeline::{build_timeline, Period},
            uptime::{uptime_class, UptimeCard, UptimeClass},
        },
    },
    model::{event::ServerEventDto, server::ServerStatus},
};

fn status_badge(status: ServerStatus) -> &'static str {
    match status {
        ServerStatus::Online => "badge-success",
        ServerStatus::Offline => "badge-error",
        ServerStatus::Unknown => "badge-ghost",
    }
}

fn segment_class(status: ServerStatus) -> &'static str {
    match status {
        ServerStatus::Online => "bg-success",
        ServerStatus::Offline => "bg-error",
        ServerStatus::Unknown => "bg-base-300",
    }
}

fn uptime_text_class(class: UptimeClass) -> &'static str {
    match class {
        UptimeClass::Low => "text-error",
        UptimeClass::Medium => "text-warning",
        UptimeClass::High => "text-success",
    }
}

#[component]
pub fn ServerCard(
    card: UptimeCard,
    events: Vec<ServerEventDto>,
    period: Period,
    now: DateTime<Utc>,
) -> Element {
    let summary = &card.summary;
    let class = uptime_class(summary.uptime_percentage);
    let timeline = build_timeline(
        &events,
        summary.current_status,
        period,
        now,
        TIMELINE_SEGMENTS,
    );
    let last_change = summary
        .last_status_change
        .map(|date| format_relative(date, now, true))
        .unwrap_or_else(|| "never".to_string());
    let tag = card.inbound_tag.clone().unwrap_or_else(|| "N/A".to_string());
    let status = status_text(summary.current_status);
    let badge = status_badge(summary.current_status);
    let value_class = uptime_text_class(class);
    let class_name = class.as_str();
    let uptime = format!("{:.2}%", summary.uptime_percentage);

    rsx!(
        div {
            class: "card bg-base-200 shadow-sm",
            "data-uptime": class_name,
            div {
                class: "card-body gap-3 p-4",
                div {
                    class: "flex items-start justify-between gap-2",
                    div {
                        p { class: "font-mono font-semibold", "{summary.server_ip}" }
                        p { class: "text-xs opacity-60", "{tag}" }
                    }
                    span { class: "badge badge-sm {badge}", "{status}" }
                }
                p { class: "text-3xl font-bold {value_class}", "{uptime}" }
                div {
                    class: "flex h-6 gap-px overflow-hidden rounded",
                    title: "Last {period.as_str()}",
                    for (i, segment) in timeline.into_iter().enumerate() {
                        div {
                            key: "{i}",
                            class: "flex-1 {segment_class(segment)}",
                            title: "{status_text(segment)}",
                        }
                    }
                }
                div {
                    class: "flex justify-between text-xs opacity-60",
                    span { "{summary.total_events} events" }
                    span { "Changed {last_change}" }
                }
            }
        }
    )
}
