use dioxus::prelude::*;

use crate::client::store::{actions::PendingAction, server_table::ServerTable};

/// Bulk controls shown while servers are selected.
#[component]
pub fn ActionsBar(
    mut table: Signal<ServerTable>,
    scripts: Vec<String>,
    mut bar_script: Signal<String>,
    on_action: EventHandler<PendingAction>,
) -> Element {
    let selected = table.read().selected_ips();
    let count = selected.len();

    if count == 0 {
        return rsx!();
    }

    let run_ips = selected.clone();
    let reboot_ips = selected.clone();
    let delete_ips = selected;

    rsx!(
        div {
            class: "flex flex-wrap items-center gap-2 rounded-box bg-base-200 p-3",
            span { class: "font-semibold mr-2", "Selected: {count}" }
            select {
                class: "select select-sm w-48",
                value: "{bar_script}",
                onchange: move |evt| bar_script.set(evt.value()),
                option { value: "", selected: bar_script.read().is_empty(), "Script..." }
                for script in scripts {
                    option { key: "{script}", value: "{script}", "{script}" }
                }
            }
            button {
                class: "btn btn-sm btn-primary",
                onclick: move |_| {
                    let script = bar_script();
                    on_action.call(PendingAction::RunScript {
                        ips: run_ips.clone(),
                        script: (!script.is_empty()).then_some(script),
                    });
                },
                "Run"
            }
            button {
                class: "btn btn-sm btn-warning",
                onclick: move |_| on_action.call(PendingAction::Reboot { ips: reboot_ips.clone() }),
                "Reboot"
            }
            button {
                class: "btn btn-sm btn-error",
                onclick: move |_| on_action.call(PendingAction::Delete { ips: delete_ips.clone() }),
                "Delete"
            }
            button {
                class: "btn btn-sm btn-ghost ml-auto",
                onclick: move |_| table.write().clear_selection(),
                "Clear selection"
            }
        }
    )
}
