use dioxus::prelude::*;

use crate::client::{
    component::{server_form::ServerForm, Page},
    constant::SITE_NAME,
    store::ip_tags::IpTagMode,
};

/// Runs the inbound's setup script over SSH before registering each server.
#[component]
pub fn SetupServer() -> Element {
    rsx!(
        Title { "Set up server | {SITE_NAME}" }
        Page {
            div {
                class: "flex flex-col gap-6",
                div {
                    h1 { class: "text-2xl font-bold", "Set up server" }
                    p {
                        class: "opacity-70",
                        "Installs the selected inbound on fresh servers. Only servers that finish setup are added."
                    }
                }
                ServerForm { mode: IpTagMode::Setup }
            }
        }
    )
}
