//! Token lifecycle: storing a fresh login and refreshing it before it lapses.

use chrono::Utc;
use dioxus_logger::tracing;
use gloo_timers::future::TimeoutFuture;

use crate::{
    client::{
        api::auth::{get_user, refresh},
        browser,
        model::{auth::AuthState, error::ApiError},
        store::auth::StoredToken,
    },
    model::auth::TokenDto,
};

/// Poll interval while there is nothing to refresh.
const IDLE_CHECK_MS: u32 = 60_000;

pub fn store_login(token: TokenDto) -> StoredToken {
    let stored = StoredToken::from_dto(token);
    browser::save_token(&stored);
    stored
}

/// Resolves the session state on page load from the stored token.
pub async fn restore() -> AuthState {
    let Some(token) = browser::load_token().await else {
        return AuthState::NotLoggedIn;
    };

    if !token.is_valid(Utc::now()) {
        if let Err(e) = refresh_stored(&token).await {
            tracing::info!("Stored session could not be refreshed: {}", e);
            browser::clear_token();
            return AuthState::NotLoggedIn;
        }
    }

    AuthState::from_lookup(get_user().await)
}

async fn refresh_stored(token: &StoredToken) -> Result<StoredToken, ApiError> {
    let refresh_token = token.refresh_token.clone().ok_or_else(|| ApiError {
        status: 401,
        message: "No refresh token stored".to_string(),
    })?;

    let fresh = refresh(refresh_token).await?;
    Ok(store_login(fresh))
}

/// Runs for the lifetime of the app, refreshing the access token five minutes before expiry.
pub async fn keep_fresh() {
    loop {
        let delay = browser::load_token()
            .await
            .and_then(|token| token.refresh_delay(Utc::now()));

        let Some(delay) = delay else {
            TimeoutFuture::new(IDLE_CHECK_MS).await;
            continue;
        };

        let delay_ms = u32::try_from(delay.num_milliseconds()).unwrap_or(u32::MAX);
        TimeoutFuture::new(delay_ms).await;

        // The token may have been replaced or cleared while sleeping.
        let Some(token) = browser::load_token().await else {
            continue;
        };
        match refresh_stored(&token).await {
            Ok(_) => tracing::debug!("Access token refreshed"),
            Err(e) if e.is_unauthorized() => {
                tracing::warn!("Refresh token rejected: {}", e);
                browser::clear_token();
            }
            Err(e) => tracing::error!("Failed to refresh access token: {}", e),
        }
    }
}
