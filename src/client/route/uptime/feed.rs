use chrono::{DateTime, Utc};
use dioxus::prelude::*;

use crate::{
    client::store::{
        format::format_relative,
        uptime::{describe_event, event_tone, EVENT_LIMIT_CHOICES},
    },
    model::event::ServerEventDto,
};

fn dot_class(tone: &str) -> &'static str {
    match tone {
        "success" => "status status-success",
        _ => "status status-warning",
    }
}

/// Recent events across all servers, newest first.
#[component]
pub fn ActivityFeed(
    events: Vec<ServerEventDto>,
    mut limit: Signal<usize>,
    now: DateTime<Utc>,
) -> Element {
    rsx!(
        div {
            class: "card bg-base-200",
            div {
                class: "card-body gap-4 p-4",
                div {
                    class: "flex items-center justify-between",
                    h2 { class: "card-title text-lg", "Activity" }
                    div {
                        class: "join",
                        for choice in EVENT_LIMIT_CHOICES {
                            button {
                                key: "{choice}",
                                class: if limit() == choice { "btn btn-xs join-item btn-active" } else { "btn btn-xs join-item" },
                                onclick: move |_| limit.set(choice),
                                "{choice}"
                            }
                        }
                    }
                }
                if events.is_empty() {
                    p { class: "text-sm opacity-60 py-4 text-center", "No events in this period" }
                } else {
                    ul {
                        class: "flex flex-col gap-2",
                        for event in events {
                            li {
                                key: "{event.id}",
                                class: "flex items-start gap-3",
                                span { class: "{dot_class(event_tone(event.event_type))} mt-1.5" }
                                div {
                                    p { class: "text-sm", "{describe_event(&event)}" }
                                    p { class: "text-xs opacity-60", "{format_relative(event.event_time, now, false)}" }
                                }
                            }
                        }
                    }
                }
            }
        }
    )
}
