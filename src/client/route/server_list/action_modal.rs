use dioxus::prelude::*;

use crate::client::store::actions::PendingAction;

/// Inputs rendered inside the confirmation modal for actions that need them.
#[component]
pub fn ActionFields(
    mut pending: Signal<Option<PendingAction>>,
    scripts: Vec<String>,
    inbound_tags: Vec<String>,
    mut edit_ip: Signal<String>,
    mut edit_tag: Signal<String>,
    disabled: bool,
) -> Element {
    let Some(action) = pending() else {
        return rsx!();
    };

    match action {
        PendingAction::RunScript { ips, script } => {
            let current = script.unwrap_or_default();
            rsx!(
                fieldset {
                    class: "fieldset",
                    legend { class: "fieldset-legend", "Script" }
                    select {
                        class: "select w-full",
                        value: "{current}",
                        disabled,
                        onchange: move |evt| {
                            let value = evt.value();
                            pending.set(Some(PendingAction::RunScript {
                                ips: ips.clone(),
                                script: (!value.is_empty()).then_some(value),
                            }));
                        },
                        option { value: "", selected: current.is_empty(), "Select a script..." }
                        for name in scripts {
                            option { key: "{name}", value: "{name}", "{name}" }
                        }
                    }
                }
            )
        }
        PendingAction::Edit { .. } => rsx!(
            fieldset {
                class: "fieldset",
                legend { class: "fieldset-legend", "IP address" }
                input {
                    class: "input w-full font-mono",
                    value: "{edit_ip}",
                    disabled,
                    oninput: move |evt| edit_ip.set(evt.value()),
                }
            }
            fieldset {
                class: "fieldset",
                legend { class: "fieldset-legend", "Inbound" }
                select {
                    class: "select w-full",
                    value: "{edit_tag}",
                    disabled,
                    onchange: move |evt| edit_tag.set(evt.value()),
                    option { value: "", selected: edit_tag.read().is_empty(), "No inbound" }
                    for tag in inbound_tags {
                        option { key: "{tag}", value: "{tag}", "{tag}" }
                    }
                }
            }
        ),
        PendingAction::Delete { .. } | PendingAction::Reboot { .. } => rsx!(),
    }
}
