use dioxus::prelude::*;

use crate::client::{
    component::ToastContext, constant::SITE_NAME, model::auth::AuthContext, router::Route,
    store::theme::Theme,
};

#[cfg(feature = "web")]
use crate::client::{browser, session};

const TAILWIND_CSS: Asset = asset!("/assets/tailwind.css");

#[component]
pub fn App() -> Element {
    let mut auth = use_context_provider(AuthContext::new);
    use_context_provider(ToastContext::new);
    let mut theme = use_context_provider(|| Signal::new(Theme::default()));

    // Resolve the stored session on first load
    #[cfg(feature = "web")]
    use_future(move || async move {
        auth.set(session::restore().await);
    });

    #[cfg(feature = "web")]
    use_future(|| session::keep_fresh());

    #[cfg(feature = "web")]
    use_future(move || async move {
        let stored = browser::load_theme().await;
        browser::apply_theme(stored);
        theme.set(stored);
    });

    rsx! {
        Title { "{SITE_NAME}" }
        document::Meta {
            name: "description",
            content: "Manage proxy nodes, run maintenance scripts and watch uptime"
        }
        document::Link { rel: "stylesheet", href: TAILWIND_CSS }
        Router::<Route> {}
    }
}
