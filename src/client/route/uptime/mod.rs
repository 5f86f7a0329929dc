mod card;
mod feed;

use chrono::Utc;
use dioxus::prelude::*;

use crate::client::{
    component::{toast::use_toasts, Page},
    constant::SITE_NAME,
    model::error::ApiError,
    store::{
        timeline::Period,
        uptime::{UptimeDashboard, UptimeFilter, DEFAULT_EVENT_LIMIT},
    },
};

use card::ServerCard;
use feed::ActivityFeed;

#[cfg(feature = "web")]
use crate::client::{
    api::{
        server::get_servers,
        uptime::{get_server_events, get_uptime_summary},
    },
    constant::UPTIME_EVENTS_LIMIT,
};

#[component]
pub fn Uptime() -> Element {
    let mut toasts = use_toasts();
    let mut period = use_signal(Period::default);
    let mut dashboard = use_signal(UptimeDashboard::default);
    let mut error = use_signal(|| None::<ApiError>);
    let mut loading = use_signal(|| true);
    let mut reload = use_signal(|| 0u32);
    let event_limit = use_signal(|| DEFAULT_EVENT_LIMIT);

    #[cfg(feature = "web")]
    let _data = use_resource(move || async move {
        let period = period();
        let _ = reload();
        loading.set(true);

        let (summary, events, servers) = futures::join!(
            get_uptime_summary(period),
            get_server_events(period, UPTIME_EVENTS_LIMIT),
            get_servers()
        );

        match (summary, events, servers) {
            (Ok(summary), Ok(events), Ok(servers)) => {
                let (filter, search) = {
                    let current = dashboard.peek();
                    (current.filter, current.search.clone())
                };
                let mut next = UptimeDashboard::new(summary.data, events.events, servers.servers);
                next.filter = filter;
                next.search = search;
                dashboard.set(next);
                error.set(None);
            }
            (Err(err), _, _) | (_, Err(err), _) | (_, _, Err(err)) => {
                dioxus_logger::tracing::error!("Failed to load uptime data: {}", err);
                toasts.push_error("Failed to load uptime data", &err);
                dashboard.set(UptimeDashboard::default());
                error.set(Some(err));
            }
        }

        loading.set(false);
    });

    let now = Utc::now();
    let current_period = period();
    let overview = dashboard.read().overview();
    let active_count = overview.online;
    let filter = dashboard.read().filter;
    let search = dashboard.read().search.clone();
    let cards: Vec<_> = dashboard
        .read()
        .visible_cards()
        .into_iter()
        .map(|card| {
            let events = dashboard.read().events_for(&card.summary.server_ip);
            (card.clone(), events)
        })
        .collect();
    let recent: Vec<_> = dashboard
        .read()
        .recent_events(event_limit())
        .into_iter()
        .cloned()
        .collect();
    let average = format!("{:.1}%", overview.average_uptime);

    rsx!(
        Title { "Uptime | {SITE_NAME}" }
        Page {
            div {
                class: "flex flex-col gap-6",
                div {
                    class: "flex flex-wrap items-center justify-between gap-4",
                    h1 { class: "text-2xl font-bold", "Uptime" }
                    div {
                        class: "flex items-center gap-2",
                        div {
                            class: "join",
                            for choice in Period::ALL {
                                button {
                                    key: "{choice.as_str()}",
                                    class: if current_period == choice { "btn btn-sm join-item btn-active" } else { "btn btn-sm join-item" },
                                    disabled: loading(),
                                    onclick: move |_| period.set(choice),
                                    "{choice.as_str()}"
                                }
                            }
                        }
                        button {
                            class: "btn btn-sm btn-outline",
                            disabled: loading(),
                            onclick: move |_| reload += 1,
                            if loading() {
                                span { class: "loading loading-spinner loading-xs" }
                            }
                            "Refresh"
                        }
                    }
                }
                div {
                    class: "stats stats-vertical sm:stats-horizontal bg-base-200 w-full",
                    div {
                        class: "stat",
                        div { class: "stat-title", "Servers" }
                        div { class: "stat-value", "{overview.total}" }
                    }
                    div {
                        class: "stat",
                        div { class: "stat-title", "Online" }
                        div { class: "stat-value text-success", "{overview.online}" }
                    }
                    div {
                        class: "stat",
                        div { class: "stat-title", "Average uptime" }
                        div { class: "stat-value", "{average}" }
                    }
                }
                div {
                    class: "flex flex-wrap items-center gap-4",
                    div {
                        role: "tablist",
                        class: "tabs tabs-box",
                        button {
                            role: "tab",
                            class: if filter == UptimeFilter::All { "tab tab-active" } else { "tab" },
                            onclick: move |_| dashboard.write().filter = UptimeFilter::All,
                            "All ({overview.total})"
                        }
                        button {
                            role: "tab",
                            class: if filter == UptimeFilter::Active { "tab tab-active" } else { "tab" },
                            onclick: move |_| dashboard.write().filter = UptimeFilter::Active,
                            "Active ({active_count})"
                        }
                    }
                    input {
                        r#type: "search",
                        class: "input input-sm flex-1 min-w-48",
                        placeholder: "Search by IP or inbound",
                        value: "{search}",
                        oninput: move |evt| dashboard.write().search = evt.value(),
                    }
                }
                div {
                    class: "grid gap-6 xl:grid-cols-[1fr_22rem]",
                    div {
                        if let Some(err) = error() {
                            div {
                                class: "alert alert-error",
                                role: "alert",
                                "Uptime data is unavailable: {err}"
                            }
                        } else if loading() && cards.is_empty() {
                            div {
                                class: "flex justify-center py-16",
                                span { class: "loading loading-spinner loading-lg" }
                            }
                        } else if cards.is_empty() {
                            p { class: "py-16 text-center opacity-60", "No servers match" }
                        } else {
                            div {
                                class: "grid gap-4 sm:grid-cols-2 2xl:grid-cols-3",
                                for (card, events) in cards {
                                    ServerCard {
                                        key: "{card.summary.server_ip}",
                                        card,
                                        events,
                                        period: current_period,
                                        now,
                                    }
                                }
                            }
                        }
                    }
                    if error().is_some() {
                        div {
                            class: "card bg-base-200",
                            div {
                                class: "card-body p-4 opacity-60",
                                "Activity is unavailable"
                            }
                        }
                    } else {
                        ActivityFeed { events: recent, limit: event_limit, now }
                    }
                }
            }
        }
    )
}
