use dioxus::prelude::*;

use crate::client::{
    component::page::{ErrorPage, LoadingPage},
    model::auth::{AuthContext, AuthState},
    router::Route,
};

/// Renders the nested routes only for a signed-in user, sending everyone else to the
/// login page with the requested path as `next`.
#[component]
pub fn RequiresLoggedIn() -> Element {
    let auth = use_context::<AuthContext>();
    let route = use_route::<Route>();
    let nav = navigator();

    let state = auth.read().clone();
    let logged_out = state == AuthState::NotLoggedIn;

    use_effect(use_reactive!(|(logged_out, route)| {
        if logged_out {
            nav.replace(Route::Login {
                next: route.to_string(),
            });
        }
    }));

    match state {
        AuthState::Initializing | AuthState::NotLoggedIn => rsx!(LoadingPage {}),
        AuthState::Error(err) => rsx!(ErrorPage {
            status: err.status,
            message: err.message
        }),
        AuthState::Authenticated(_) => rsx!(Outlet::<Route> {}),
    }
}
