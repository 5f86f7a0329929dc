use dioxus::prelude::*;

use crate::{
    client::{
        component::{toast::use_toasts, IpTagsInput},
        model::error::ApiError,
        store::{
            bulk::BulkOutcome,
            ip_tags::{IpTagMode, IpTags},
            toast::ToastKind,
        },
    },
    model::inbound::InboundDto,
};

#[cfg(feature = "web")]
use crate::{
    client::{
        api::{
            inbound::get_inbounds,
            server::{add_servers_manual, setup_servers},
        },
        constant::FORM_ALERT_MS,
    },
    model::server::AddServersDto,
};

#[derive(Clone, PartialEq)]
struct FormAlert {
    message: String,
    success: bool,
}

/// Inbound select plus address tags, shared by the add and setup pages.
///
/// Manual mode only registers the servers; setup mode deploys the inbound's script first.
#[component]
pub fn ServerForm(mode: IpTagMode) -> Element {
    let mut toasts = use_toasts();
    let mut inbounds = use_signal(Vec::<InboundDto>::new);
    let mut inbound_error = use_signal(|| None::<ApiError>);
    let mut inbound_tag = use_signal(String::new);
    let mut tags = use_signal(|| IpTags::new(mode));
    let mut submitting = use_signal(|| false);
    let mut alert = use_signal(|| None::<FormAlert>);

    #[cfg(feature = "web")]
    use_future(move || async move {
        match get_inbounds().await {
            Ok(data) => inbounds.set(data.data),
            Err(err) => {
                dioxus_logger::tracing::error!("Failed to load inbounds: {}", err);
                toasts.push_error("Failed to load inbounds", &err);
                inbound_error.set(Some(err));
            }
        }
    });

    let mut show_alert = move |message: String, success: bool| {
        alert.set(Some(FormAlert { message, success }));
        #[cfg(feature = "web")]
        spawn(async move {
            gloo_timers::future::TimeoutFuture::new(FORM_ALERT_MS).await;
            alert.set(None);
        });
    };

    let on_submit = move |evt: FormEvent| {
        evt.prevent_default();

        let tag = inbound_tag();
        if tag.is_empty() {
            show_alert("Select an inbound".to_string(), false);
            toasts.push("Inbound is required", ToastKind::Error);
            return;
        }
        if tags.read().is_empty() {
            show_alert("Add at least one IP address".to_string(), false);
            toasts.push("IP address is required", ToastKind::Error);
            return;
        }

        #[cfg(feature = "web")]
        {
            let payload = AddServersDto {
                ips: tags.read().items().to_vec(),
                inbound_tag: tag,
            };
            submitting.set(true);

            spawn(async move {
                let result = match mode {
                    IpTagMode::Manual => add_servers_manual(payload).await,
                    IpTagMode::Setup => setup_servers(payload).await,
                };

                match result {
                    Ok(data) => {
                        let outcome = BulkOutcome::from_results(&data.results);
                        let verb = match mode {
                            IpTagMode::Manual => "Added",
                            IpTagMode::Setup => "Set up",
                        };

                        if outcome.all_succeeded() {
                            show_alert(
                                format!("{} {} server(s)", verb, outcome.succeeded),
                                true,
                            );
                            inbound_tag.set(String::new());
                            tags.write().clear();
                        } else {
                            show_alert(
                                format!(
                                    "{}: {}, failed: {}",
                                    verb,
                                    outcome.succeeded,
                                    outcome.failures.len()
                                ),
                                false,
                            );
                        }
                        toasts.push_for(
                            outcome.summary(verb),
                            outcome.toast_kind(),
                            outcome.toast_duration_ms(),
                        );
                    }
                    Err(err) => {
                        dioxus_logger::tracing::error!("Failed to submit servers: {}", err);
                        show_alert(err.message.clone(), false);
                        toasts.push_error("Request failed", &err);
                    }
                }

                submitting.set(false);
            });
        }
    };

    let idle_label = tags.read().submit_label();
    let busy_label = match mode {
        IpTagMode::Manual => "Adding...",
        IpTagMode::Setup => "Setting up...",
    };
    let ip_count = tags.read().len();
    let no_tags = ip_count == 0;

    rsx!(
        form {
            class: "card bg-base-200 w-full max-w-2xl",
            onsubmit: on_submit,
            div {
                class: "card-body gap-4",
                if let Some(FormAlert { message, success }) = alert() {
                    div {
                        role: "alert",
                        class: if success { "alert alert-success" } else { "alert alert-error" },
                        "{message}"
                    }
                }
                fieldset {
                    class: "fieldset",
                    legend { class: "fieldset-legend", "Inbound" }
                    select {
                        class: "select w-full",
                        value: "{inbound_tag}",
                        disabled: submitting(),
                        onchange: move |evt| inbound_tag.set(evt.value()),
                        option { value: "", disabled: true, selected: inbound_tag.read().is_empty(), "Select an inbound..." }
                        for inbound in inbounds() {
                            option {
                                key: "{inbound.inbound_tag}",
                                value: "{inbound.inbound_tag}",
                                "{inbound.server_name} ({inbound.inbound_tag})"
                            }
                        }
                    }
                    if let Some(err) = inbound_error() {
                        p { class: "label text-error", "Inbounds unavailable: {err}" }
                    }
                }
                fieldset {
                    class: "fieldset",
                    legend { class: "fieldset-legend", "IP addresses ({ip_count})" }
                    IpTagsInput { tags, disabled: submitting() }
                    p { class: "label", "Separate with Enter, space or comma. Paste a list to add many at once." }
                }
                div {
                    class: "card-actions justify-end",
                    button {
                        r#type: "submit",
                        class: "btn btn-primary",
                        disabled: no_tags || submitting(),
                        if submitting() {
                            span { class: "loading loading-spinner loading-sm" }
                            "{busy_label}"
                        } else {
                            "{idle_label}"
                        }
                    }
                }
            }
        }
    )
}
