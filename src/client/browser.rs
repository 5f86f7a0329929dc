//! Local storage and location access through `document::eval`.

use dioxus::dioxus_core::spawn_forever;
use dioxus::prelude::*;
use dioxus_logger::tracing;

use crate::client::store::{
    auth::{
        login_redirect, StoredToken, ACCESS_TOKEN_KEY, REFRESH_TOKEN_KEY, TOKEN_EXPIRES_AT_KEY,
        TOKEN_KEYS, TOKEN_TYPE_KEY,
    },
    theme::{Theme, THEME_STORAGE_KEY},
};

/// Quotes a value as a JavaScript string literal.
fn js_string(value: &str) -> String {
    serde_json::to_string(value).unwrap_or_else(|_| "\"\"".to_string())
}

/// Runs a script that returns nothing, logging a failure instead of surfacing it.
///
/// Runs on the root scope so callers inside `use_drop` are safe.
pub fn run_script(script: impl Into<String>) {
    let script = returning_null(&script.into());
    spawn_forever(async move {
        if let Err(e) = document::eval(&script).join::<()>().await {
            tracing::warn!("Browser script failed: {}", e);
        }
    });
}

/// `join` needs a value back, so fire-and-forget scripts end with an explicit `null`.
fn returning_null(script: &str) -> String {
    format!("{}\nreturn null;", script.trim_end())
}

pub async fn get_item(key: &str) -> Option<String> {
    let script = format!("return localStorage.getItem({});", js_string(key));
    match document::eval(&script).join::<Option<String>>().await {
        Ok(value) => value,
        Err(e) => {
            tracing::warn!("Failed to read '{}' from local storage: {}", key, e);
            None
        }
    }
}

pub fn set_item(key: &str, value: &str) {
    run_script(format!(
        "localStorage.setItem({}, {});",
        js_string(key),
        js_string(value)
    ));
}

pub fn remove_item(key: &str) {
    run_script(format!("localStorage.removeItem({});", js_string(key)));
}

pub async fn load_token() -> Option<StoredToken> {
    StoredToken::from_parts(
        get_item(ACCESS_TOKEN_KEY).await,
        get_item(TOKEN_TYPE_KEY).await,
        get_item(TOKEN_EXPIRES_AT_KEY).await,
        get_item(REFRESH_TOKEN_KEY).await,
    )
}

pub fn save_token(token: &StoredToken) {
    clear_token();
    for (key, value) in token.storage_entries() {
        set_item(key, &value);
    }
}

pub fn clear_token() {
    for key in TOKEN_KEYS {
        remove_item(key);
    }
}

pub async fn load_theme() -> Theme {
    Theme::from_storage(get_item(THEME_STORAGE_KEY).await.as_deref())
}

/// Persists the theme and mirrors it on `<html data-theme>`.
pub fn apply_theme(theme: Theme) {
    match theme.storage_value() {
        Some(value) => set_item(THEME_STORAGE_KEY, value),
        None => remove_item(THEME_STORAGE_KEY),
    }

    let script = if theme.is_dark() {
        "document.documentElement.setAttribute('data-theme', 'dark');"
    } else {
        "document.documentElement.removeAttribute('data-theme');"
    };
    run_script(script);
}

pub async fn current_path() -> String {
    document::eval("return window.location.pathname + window.location.search;")
        .join::<String>()
        .await
        .unwrap_or_else(|_| "/".to_string())
}

/// Full page navigation to the login form, remembering where the user was.
pub async fn redirect_to_login() {
    let path = current_path().await;
    if path.starts_with("/login") {
        return;
    }

    let script = format!(
        "window.location.assign({}); return null;",
        js_string(&login_redirect(&path))
    );
    if let Err(e) = document::eval(&script).join::<()>().await {
        tracing::warn!("Failed to redirect to the login page: {}", e);
    }
}
