pub mod confirmation_modal;

use dioxus::prelude::*;

pub use confirmation_modal::ConfirmationModal;

#[cfg(feature = "web")]
use crate::client::browser;

/// Dialog shell; the ✕ button, the backdrop and Escape all close it unless `prevent_close`.
#[component]
pub fn Modal(
    open: bool,
    title: String,
    prevent_close: bool,
    on_close: EventHandler<()>,
    class: Option<&'static str>,
    children: Element,
) -> Element {
    let width = class.unwrap_or("max-w-lg");
    let request_close = move || {
        if !prevent_close {
            on_close.call(());
        }
    };

    #[cfg(feature = "web")]
    use_effect(use_reactive!(|open| {
        if open {
            browser::run_script("document.querySelector('.modal-open')?.focus();");
        }
    }));

    if !open {
        return rsx!();
    }

    rsx!(
        div {
            class: "modal modal-open",
            role: "dialog",
            aria_modal: "true",
            aria_labelledby: "modal-title",
            tabindex: "-1",
            onkeydown: move |evt| {
                if evt.key() == Key::Escape {
                    request_close();
                }
            },
            div {
                class: "modal-box w-11/12 {width}",
                div {
                    class: "mb-4 flex items-center justify-between gap-4",
                    h3 { id: "modal-title", class: "text-lg font-bold", "{title}" }
                    button {
                        class: "btn btn-sm btn-circle btn-ghost",
                        aria_label: "Close",
                        disabled: prevent_close,
                        onclick: move |_| request_close(),
                        "✕"
                    }
                }
                {children}
            }
            div { class: "modal-backdrop", onclick: move |_| request_close() }
        }
    )
}
