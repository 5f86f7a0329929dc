use dioxus::prelude::*;

use crate::client::{
    component::toast::use_toasts,
    store::{
        ip_tags::{key_action, split_pending, IpTags, TagKeyAction},
        toast::ToastKind,
    },
};

/// Multi-address input rendering each entry as a removable tag.
#[component]
pub fn IpTagsInput(mut tags: Signal<IpTags>, disabled: bool) -> Element {
    let mut toasts = use_toasts();
    let mut buffer = use_signal(String::new);

    let mut commit = move |values: Vec<String>| {
        let rejected = tags.write().add_all(values);
        for (value, reason) in rejected {
            toasts.push(reason.message(&value), ToastKind::Warning);
        }
    };

    let items = tags.read().items().to_vec();

    rsx!(
        div {
            class: "flex flex-wrap items-center gap-2 min-h-12 p-2 border border-base-300 rounded-box bg-base-100",
            for ip in items {
                span {
                    key: "{ip}",
                    class: "badge badge-primary gap-1 font-mono",
                    "{ip}"
                    button {
                        r#type: "button",
                        class: "btn btn-ghost btn-xs px-1",
                        disabled,
                        aria_label: "Remove {ip}",
                        onclick: {
                            let ip = ip.clone();
                            move |_| tags.write().remove(&ip)
                        },
                        "✕"
                    }
                }
            }
            input {
                class: "grow min-w-40 bg-transparent outline-none font-mono",
                r#type: "text",
                placeholder: "10.0.0.1, 10.0.0.2 ...",
                disabled,
                value: "{buffer}",
                oninput: move |evt| {
                    let (complete, rest) = split_pending(&evt.value());
                    if !complete.is_empty() {
                        commit(complete);
                    }
                    buffer.set(rest);
                },
                onkeydown: move |evt| {
                    let key = evt.key().to_string();
                    let buffer_empty = buffer.read().is_empty();
                    match key_action(&key, buffer_empty) {
                        TagKeyAction::Commit => {
                            evt.prevent_default();
                            let value = buffer.read().clone();
                            if !value.trim().is_empty() {
                                commit(vec![value]);
                            }
                            buffer.set(String::new());
                        }
                        TagKeyAction::RemoveLast => {
                            tags.write().pop_last();
                        }
                        TagKeyAction::Ignore => {}
                    }
                },
                onblur: move |_| {
                    let value = buffer.read().clone();
                    if !value.trim().is_empty() {
                        commit(vec![value]);
                        buffer.set(String::new());
                    }
                },
            }
        }
    )
}
