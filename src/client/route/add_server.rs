use dioxus::prelude::*;

use crate::client::{
    component::{server_form::ServerForm, Page},
    constant::SITE_NAME,
    store::ip_tags::IpTagMode,
};

#[component]
pub fn AddServer() -> Element {
    rsx!(
        Title { "Add server | {SITE_NAME}" }
        Page {
            div {
                class: "flex flex-col gap-6",
                div {
                    h1 { class: "text-2xl font-bold", "Add server" }
                    p {
                        class: "opacity-70",
                        "Registers already configured servers under an inbound without connecting to them."
                    }
                }
                ServerForm { mode: IpTagMode::Manual }
            }
        }
    )
}
