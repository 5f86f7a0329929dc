use dioxus::prelude::*;
use dioxus_free_icons::{
    icons::fa_solid_icons::{
        FaBars, FaChartLine, FaList, FaMoon, FaPlus, FaRightFromBracket, FaServer, FaSun,
    },
    Icon,
};

use crate::client::{
    component::toast::{use_toasts, ToastContainer},
    constant::SITE_NAME,
    model::auth::AuthContext,
    router::Route,
    store::{theme::Theme, toast::ToastKind},
};

#[cfg(feature = "web")]
use crate::client::{api::auth::logout, browser};

/// Sidebar shell around every signed-in page.
#[component]
pub fn Layout() -> Element {
    let mut menu_open = use_signal(|| false);

    rsx!(
        div {
            class: "drawer lg:drawer-open",
            onkeydown: move |evt| {
                if evt.key() == Key::Escape {
                    menu_open.set(false);
                }
            },
            input {
                id: "sidebar-toggle",
                r#type: "checkbox",
                class: "drawer-toggle",
                checked: menu_open(),
                onchange: move |evt| menu_open.set(evt.checked()),
            }
            div {
                class: "drawer-content flex flex-col",
                TopBar { menu_open }
                main {
                    class: "flex-1",
                    Outlet::<Route> {}
                }
            }
            div {
                class: "drawer-side z-30",
                label {
                    r#for: "sidebar-toggle",
                    aria_label: "Close menu",
                    class: "drawer-overlay",
                    onclick: move |_| menu_open.set(false),
                }
                Sidebar { on_navigate: move |_| menu_open.set(false) }
            }
        }
        ToastContainer {}
    )
}

#[derive(Clone, Copy, PartialEq)]
enum NavIcon {
    List,
    Plus,
    Server,
    Chart,
}

#[component]
fn Sidebar(on_navigate: EventHandler<()>) -> Element {
    let links = [
        (Route::ServerList {}, "Servers", NavIcon::List),
        (Route::AddServer {}, "Add server", NavIcon::Plus),
        (Route::SetupServer {}, "Set up server", NavIcon::Server),
        (Route::Uptime {}, "Uptime", NavIcon::Chart),
    ];

    rsx!(
        aside {
            class: "min-h-full w-64 bg-base-200 p-4 flex flex-col gap-4",
            Link {
                to: Route::ServerList {},
                class: "text-xl font-bold px-2",
                onclick: move |_| on_navigate.call(()),
                {SITE_NAME}
            }
            ul {
                class: "menu gap-1 p-0 w-full",
                for (route, label, icon) in links {
                    NavItem { route, label, icon, on_navigate }
                }
            }
        }
    )
}

#[component]
fn NavItem(route: Route, label: &'static str, icon: NavIcon, on_navigate: EventHandler<()>) -> Element {
    let current = use_route::<Route>();
    let active = if current == route { "menu-active" } else { "" };

    rsx!(
        li {
            Link {
                to: route,
                class: "{active}",
                onclick: move |_| on_navigate.call(()),
                match icon {
                    NavIcon::List => rsx!(Icon { width: 16, height: 16, icon: FaList }),
                    NavIcon::Plus => rsx!(Icon { width: 16, height: 16, icon: FaPlus }),
                    NavIcon::Server => rsx!(Icon { width: 16, height: 16, icon: FaServer }),
                    NavIcon::Chart => rsx!(Icon { width: 16, height: 16, icon: FaChartLine }),
                }
                "{label}"
            }
        }
    )
}

#[component]
fn TopBar(mut menu_open: Signal<bool>) -> Element {
    let mut theme = use_context::<Signal<Theme>>();
    let mut toasts = use_toasts();
    let mut auth = use_context::<AuthContext>();
    let nav = navigator();

    let username = auth.read().user().map(|user| user.username.clone());

    let toggle_theme = move |_| {
        let next = theme().toggled();
        theme.set(next);
        #[cfg(feature = "web")]
        browser::apply_theme(next);
        toasts.push(next.enabled_message(), ToastKind::Info);
    };

    let sign_out = move |_| {
        #[cfg(feature = "web")]
        spawn(async move {
            let refresh_token = browser::load_token()
                .await
                .and_then(|token| token.refresh_token);
            if let Err(e) = logout(refresh_token).await {
                dioxus_logger::tracing::warn!("Logout request failed: {}", e);
            }
            browser::clear_token();
            auth.sign_out();
            nav.push(Route::Login {
                next: String::new(),
            });
        });
        #[cfg(not(feature = "web"))]
        {
            auth.sign_out();
            nav.push(Route::Login {
                next: String::new(),
            });
        }
    };

    rsx!(
        header {
            class: "navbar bg-base-100 border-b border-base-300 sticky top-0 z-20 gap-2",
            div {
                class: "flex-none lg:hidden",
                button {
                    class: if menu_open() { "btn btn-square btn-ghost btn-active" } else { "btn btn-square btn-ghost" },
                    aria_label: "Toggle menu",
                    onclick: move |_| menu_open.toggle(),
                    Icon { width: 18, height: 18, icon: FaBars }
                }
            }
            div { class: "flex-1" }
            div {
                class: "flex-none flex items-center gap-2",
                if let Some(username) = username {
                    span { class: "text-sm opacity-70 hidden sm:inline", "{username}" }
                }
                button {
                    class: "btn btn-ghost btn-square",
                    aria_label: "Toggle theme",
                    onclick: toggle_theme,
                    if theme().is_dark() {
                        Icon { width: 18, height: 18, icon: FaSun }
                    } else {
                        Icon { width: 18, height: 18, icon: FaMoon }
                    }
                }
                button {
                    class: "btn btn-outline btn-sm gap-2",
                    onclick: sign_out,
                    Icon { width: 14, height: 14, icon: FaRightFromBracket }
                    "Logout"
                }
            }
        }
    )
}
