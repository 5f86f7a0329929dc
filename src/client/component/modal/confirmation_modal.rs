use dioxus::prelude::*;

use crate::client::store::actions::PendingAction;

use super::Modal;

/// Confirmation dialog for a server list action; `children` holds per-action inputs.
#[component]
pub fn ConfirmationModal(
    action: Option<PendingAction>,
    is_processing: bool,
    on_cancel: EventHandler<()>,
    on_confirm: EventHandler<PendingAction>,
    children: Element,
) -> Element {
    let open = action.is_some();
    let title = action.as_ref().map(PendingAction::title).unwrap_or_default();
    let description = action
        .as_ref()
        .map(PendingAction::description)
        .unwrap_or_default();
    let confirm_label = action
        .as_ref()
        .map(PendingAction::confirm_label)
        .unwrap_or("Confirm");
    let confirm_class = if action.as_ref().is_some_and(PendingAction::is_destructive) {
        "btn-error"
    } else {
        "btn-primary"
    };

    rsx!(
        Modal {
            open,
            title,
            prevent_close: is_processing,
            on_close: move |_| on_cancel.call(()),
            p { class: "mb-4", "{description}" }
            {children}
            div {
                class: "modal-action",
                button {
                    r#type: "button",
                    class: "btn",
                    onclick: move |_| on_cancel.call(()),
                    disabled: is_processing,
                    "Cancel"
                }
                button {
                    r#type: "button",
                    class: "btn {confirm_class}",
                    onclick: move |_| {
                        if let Some(action) = action.clone() {
                            on_confirm.call(action);
                        }
                    },
                    disabled: is_processing,
                    if is_processing {
                        span { class: "loading loading-spinner loading-sm mr-2" }
                        "Working..."
                    } else {
                        "{confirm_label}"
                    }
                }
            }
        }
    )
}
