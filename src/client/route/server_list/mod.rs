mod action_modal;
mod actions_bar;
#[cfg(feature = "web")]
mod execute;
mod shortcuts;
mod table;

use dioxus::prelude::*;

use crate::client::{
    component::{modal::ConfirmationModal, toast::use_toasts, Page},
    constant::SITE_NAME,
    store::{actions::PendingAction, server_table::ServerTable, toast::ToastKind},
};

use action_modal::ActionFields;
use actions_bar::ActionsBar;
use table::{RowAction, ServersTable};

#[cfg(feature = "web")]
use crate::{
    client::{
        api::{
            inbound::get_inbound_tags,
            script::get_scripts,
            server::{get_server_statuses, get_servers},
        },
        browser,
        constant::SEARCH_DEBOUNCE_MS,
        store::{
            actions::{shortcut_for, Shortcut},
            server_table::join_statuses,
        },
    },
    model::server::EditServerDto,
};
#[cfg(feature = "web")]
use execute::ActionTargets;
#[cfg(feature = "web")]
use shortcuts::{KeyPress, BLUR_ACTIVE_JS, KEY_LISTENER_JS, REMOVE_KEY_LISTENER_JS};

#[component]
pub fn ServerList() -> Element {
    let mut toasts = use_toasts();
    let mut table = use_signal(ServerTable::default);
    let mut scripts = use_signal(Vec::<String>::new);
    let mut inbound_tags = use_signal(Vec::<String>::new);
    let bar_script = use_signal(String::new);
    let mut search = use_signal(String::new);
    let mut search_generation = use_signal(|| 0u32);
    let mut pending = use_signal(|| None::<PendingAction>);
    let mut processing = use_signal(|| false);
    let mut reload = use_signal(|| 0u32);
    let mut loading = use_signal(|| true);
    let mut edit_ip = use_signal(String::new);
    let mut edit_tag = use_signal(String::new);

    #[cfg(feature = "web")]
    let _servers = use_resource(move || async move {
        let _ = reload();
        loading.set(true);

        let (servers, statuses) = futures::join!(get_servers(), get_server_statuses());
        match servers.and_then(|servers| statuses.map(|statuses| (servers, statuses))) {
            Ok((servers, statuses)) => {
                let rows = join_statuses(servers.servers, &statuses);
                let count = rows.len();
                table.write().set_rows(rows);
                toasts.push(format!("Loaded {} servers", count), ToastKind::Info);
            }
            Err(err) => {
                dioxus_logger::tracing::error!("Failed to load servers: {}", err);
                table.write().set_rows(Vec::new());
                toasts.push_error("Failed to load servers", &err);
            }
        }

        loading.set(false);
    });

    #[cfg(feature = "web")]
    use_future(move || async move {
        let (script_list, tag_list) = futures::join!(get_scripts(), get_inbound_tags());
        match script_list {
            Ok(data) => scripts.set(data.scripts),
            Err(err) => toasts.push_error("Failed to load scripts", &err),
        }
        match tag_list {
            Ok(data) => inbound_tags.set(data.tags),
            Err(err) => toasts.push_error("Failed to load inbounds", &err),
        }
    });

    #[cfg(feature = "web")]
    use_future(move || async move {
        let mut eval = document::eval(KEY_LISTENER_JS);
        while let Ok(press) = eval.recv::<KeyPress>().await {
            let has_selection = table.peek().has_selection();
            match shortcut_for(&press.key, press.modifier, press.typing, has_selection) {
                Some(Shortcut::CloseOverlays) => {
                    if !processing() {
                        pending.set(None);
                    }
                    browser::run_script(BLUR_ACTIVE_JS);
                }
                Some(Shortcut::DeleteSelected) => {
                    if pending.peek().is_none() {
                        let ips = table.peek().selected_ips();
                        pending.set(Some(PendingAction::Delete { ips }));
                    }
                }
                Some(Shortcut::ToggleSelectAll) => table.write().toggle_select_all(),
                None => {}
            }
        }
    });
    #[cfg(feature = "web")]
    use_drop(|| {
        browser::run_script(REMOVE_KEY_LISTENER_JS);
    });

    let mut open_action = move |action: PendingAction| {
        if let PendingAction::Edit { ip } = &action {
            let tag = table
                .read()
                .rows()
                .iter()
                .find(|row| &row.ip == ip)
                .map(|row| row.inbound_tag.clone())
                .unwrap_or_default();
            edit_ip.set(ip.clone());
            edit_tag.set(tag);
        }
        pending.set(Some(action));
    };

    let on_row_action = move |(action, ip): (RowAction, String)| {
        #[cfg(feature = "web")]
        browser::run_script(BLUR_ACTIVE_JS);

        let ips = vec![ip.clone()];
        open_action(match action {
            RowAction::RunScript => PendingAction::RunScript { ips, script: None },
            RowAction::Edit => PendingAction::Edit { ip },
            RowAction::Reboot => PendingAction::Reboot { ips },
            RowAction::Delete => PendingAction::Delete { ips },
        });
    };

    let on_confirm = move |action: PendingAction| {
        if let Err(message) = action.ready() {
            toasts.push(message, ToastKind::Error);
            return;
        }
        if matches!(action, PendingAction::Edit { .. }) && edit_ip.read().trim().is_empty() {
            toasts.push("IP address is required", ToastKind::Error);
            return;
        }

        #[cfg(feature = "web")]
        {
            let targets = ActionTargets {
                table,
                toasts,
                reload,
            };
            processing.set(true);

            spawn(async move {
                match action {
                    PendingAction::RunScript { ips, script } => {
                        execute::run_script(targets, ips, script.unwrap_or_default()).await
                    }
                    PendingAction::Reboot { ips } => execute::reboot(targets, ips).await,
                    PendingAction::Delete { ips } => execute::delete(targets, ips).await,
                    PendingAction::Edit { ip } => {
                        let payload = EditServerDto {
                            old_ip: ip,
                            new_ip: edit_ip.peek().trim().to_string(),
                            new_inbound_tag: edit_tag.peek().clone(),
                        };
                        execute::edit(targets, payload).await
                    }
                }

                processing.set(false);
                pending.set(None);
            });
        }
    };

    let on_search = move |evt: FormEvent| {
        let query = evt.value();
        search.set(query.clone());
        search_generation += 1;

        #[cfg(feature = "web")]
        {
            let generation = *search_generation.peek();
            spawn(async move {
                gloo_timers::future::TimeoutFuture::new(SEARCH_DEBOUNCE_MS).await;
                if *search_generation.peek() == generation {
                    table.write().set_query(&query);
                }
            });
        }
        #[cfg(not(feature = "web"))]
        table.write().set_query(&query);
    };

    let stats = table.read().stats();

    rsx!(
        Title { "Servers | {SITE_NAME}" }
        Page {
            div {
                class: "flex flex-col gap-6",
                div {
                    class: "flex flex-wrap items-center justify-between gap-4",
                    h1 { class: "text-2xl font-bold", "Servers" }
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
                div {
                    class: "stats stats-vertical sm:stats-horizontal bg-base-200 w-full",
                    StatCard { title: "Total", value: stats.total, class: "" }
                    StatCard { title: "Online", value: stats.online, class: "text-success" }
                    StatCard { title: "Selected", value: stats.selected, class: "text-primary" }
                }
                input {
                    r#type: "search",
                    class: "input w-full",
                    placeholder: "Search by IP, inbound, date or status",
                    value: "{search}",
                    oninput: on_search,
                }
                ActionsBar {
                    table,
                    scripts: scripts(),
                    bar_script,
                    on_action: move |action| open_action(action),
                }
                if loading() && table.read().rows().is_empty() {
                    div {
                        class: "flex justify-center py-16",
                        span { class: "loading loading-spinner loading-lg" }
                    }
                } else {
                    ServersTable { table, on_row_action }
                }
                p {
                    class: "text-xs opacity-60 hidden md:block",
                    "Ctrl+A selects all, Delete removes the selection, Esc closes dialogs."
                }
            }
        }
        ConfirmationModal {
            action: pending(),
            is_processing: processing(),
            on_cancel: move |_| {
                if !processing() {
                    pending.set(None);
                }
            },
            on_confirm,
            ActionFields {
                pending,
                scripts: scripts(),
                inbound_tags: inbound_tags(),
                edit_ip,
                edit_tag,
                disabled: processing(),
            }
        }
    )
}

#[component]
fn StatCard(title: &'static str, value: usize, class: &'static str) -> Element {
    rsx!(
        div {
            class: "stat",
            div { class: "stat-title", "{title}" }
            div { class: "stat-value {class}", "{value}" }
        }
    )
}
