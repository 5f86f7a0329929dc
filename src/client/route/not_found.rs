use dioxus::prelude::*;

use crate::client::{component::Page, constant::SITE_NAME, router::Route};

#[component]
pub fn NotFound(segments: Vec<String>) -> Element {
    let path = format!("/{}", segments.join("/"));

    rsx!(
        Title { "Not found | {SITE_NAME}" }
        Page {
            class: "flex flex-col items-center justify-center gap-4",
            p { class: "text-6xl font-bold opacity-40", "404" }
            p { class: "text-lg", "Nothing lives at " code { "{path}" } }
            Link { to: Route::ServerList {}, class: "btn btn-primary", "Back to servers" }
        }
    )
}
