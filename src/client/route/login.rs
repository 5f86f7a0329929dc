use dioxus::prelude::*;

use crate::client::{
    component::{page::LoadingPage, Page},
    constant::SITE_NAME,
    model::auth::{AuthContext, AuthState},
    router::Route,
    store::auth::safe_next,
};

#[cfg(feature = "web")]
use crate::client::{
    api::auth::{get_user, login},
    session,
};

/// Route to land on after signing in, taken from the `next` query value.
fn next_route(next: &str) -> Route {
    let decoded = urlencoding::decode(next)
        .map(|value| value.into_owned())
        .unwrap_or_else(|_| next.to_string());

    match safe_next(&decoded).parse::<Route>() {
        Ok(Route::NotFound { .. }) | Ok(Route::Login { .. }) | Err(_) => Route::ServerList {},
        Ok(route) => route,
    }
}

#[component]
pub fn Login(next: String) -> Element {
    let mut auth_context = use_context::<AuthContext>();
    let nav = navigator();
    let mut username = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut error = use_signal(|| None::<String>);
    let mut submitting = use_signal(|| false);

    // Handle redirect for authenticated users
    {
        let next = next.clone();
        use_effect(move || {
            let state = auth_context.read();
            if matches!(&*state, AuthState::Authenticated(_)) {
                nav.replace(next_route(&next));
            }
        });
    }

    let on_submit = move |evt: FormEvent| {
        evt.prevent_default();
        if username.read().trim().is_empty() || password.read().is_empty() {
            error.set(Some("Enter username and password".to_string()));
            return;
        }

        #[cfg(feature = "web")]
        {
            submitting.set(true);
            error.set(None);

            spawn(async move {
                match login(username.read().trim().to_string(), password()).await {
                    Ok(token) => {
                        session::store_login(token);
                        password.set(String::new());
                        auth_context.set(AuthState::from_lookup(get_user().await));
                    }
                    Err(err) => {
                        dioxus_logger::tracing::warn!("Login failed: {}", err);
                        error.set(Some(err.message));
                    }
                }
                submitting.set(false);
            });
        }
    };

    let state = auth_context.read().clone();

    rsx! {
        Title { "Login | {SITE_NAME}" }
        match state {
            AuthState::Initializing | AuthState::Authenticated(_) => rsx! {
                LoadingPage {}
            },
            AuthState::NotLoggedIn | AuthState::Error(_) => rsx! {
                Page {
                    class: "flex items-center justify-center",
                    form {
                        class: "card bg-base-200 w-full max-w-sm",
                        onsubmit: on_submit,
                        div {
                            class: "card-body gap-4",
                            h1 {
                                class: "card-title text-2xl justify-center",
                                {SITE_NAME}
                            }
                            if let Some(message) = error() {
                                div {
                                    role: "alert",
                                    class: "alert alert-error",
                                    "{message}"
                                }
                            }
                            label {
                                class: "floating-label",
                                span { "Username" }
                                input {
                                    class: "input w-full",
                                    r#type: "text",
                                    placeholder: "Username",
                                    autocomplete: "username",
                                    value: "{username}",
                                    oninput: move |evt| username.set(evt.value()),
                                }
                            }
                            label {
                                class: "floating-label",
                                span { "Password" }
                                input {
                                    class: "input w-full",
                                    r#type: "password",
                                    placeholder: "Password",
                                    autocomplete: "current-password",
                                    value: "{password}",
                                    oninput: move |evt| password.set(evt.value()),
                                }
                            }
                            button {
                                r#type: "submit",
                                class: "btn btn-primary w-full",
                                disabled: submitting(),
                                if submitting() {
                                    span { class: "loading loading-spinner loading-sm" }
                                }
                                "Sign in"
                            }
                        }
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn next_route_decodes_local_paths() {
        assert_eq!(next_route("%2Fuptime"), Route::Uptime {});
        assert_eq!(next_route("/setup"), Route::SetupServer {});
    }

    #[test]
    fn next_route_falls_back_to_server_list() {
        assert_eq!(next_route(""), Route::ServerList {});
        assert_eq!(next_route("https%3A%2F%2Fevil.example"), Route::ServerList {});
        assert_eq!(next_route("/no/such/page"), Route::ServerList {});
    }
}
