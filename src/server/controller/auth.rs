use axum::{extract::State, http::HeaderMap, http::StatusCode, response::IntoResponse, Json};
use dioxus_logger::tracing;

use crate::{
    model::{
        api::ErrorDto,
        auth::{LoginDto, LogoutDto, RefreshDto, TokenDto, UserDto},
        server::OperationDto,
    },
    server::{
        error::AppError,
        middleware::{auth::AuthGuard, client::ClientAddr},
        service::{auth::AuthService, rate_limit::login_key},
        state::AppState,
    },
};

pub static AUTH_TAG: &str = "auth";

#[utoipa::path(
    post,
    path = "/api/auth/login",
    tag = AUTH_TAG,
    request_body = LoginDto,
    responses(
        (status = 200, description = "Credentials accepted", body = TokenDto),
        (status = 401, description = "Invalid username or password", body = ErrorDto),
        (status = 403, description = "Account is disabled", body = ErrorDto),
        (status = 423, description = "Account locked after repeated failures", body = ErrorDto),
        (status = 429, description = "Too many login attempts", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn login(
    State(state): State<AppState>,
    ClientAddr(client): ClientAddr,
    Json(payload): Json<LoginDto>,
) -> Result<impl IntoResponse, AppError> {
    let username = payload.username.trim();

    if !state.login_limiter.check(&login_key(&client, username)).await {
        tracing::warn!("Login rate limit exceeded for {} from {}", username, client);
        return Err(AppError::TooManyRequests(
            "Too many login attempts, please wait a minute".to_string(),
        ));
    }

    let tokens = AuthService::new(&state.db, &state.token_keys)
        .login(username, &payload.password, &client)
        .await?;

    Ok((StatusCode::OK, Json(tokens.into_dto())))
}

#[utoipa::path(
    post,
    path = "/api/auth/refresh",
    tag = AUTH_TAG,
    request_body = RefreshDto,
    responses(
        (status = 200, description = "New token pair", body = TokenDto),
        (status = 401, description = "Refresh token invalid, expired or revoked", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn refresh(
    State(state): State<AppState>,
    Json(payload): Json<RefreshDto>,
) -> Result<impl IntoResponse, AppError> {
    let tokens = AuthService::new(&state.db, &state.token_keys)
        .refresh(&payload.refresh_token)
        .await?;

    Ok((StatusCode::OK, Json(tokens.into_dto())))
}

/// Revokes the submitted refresh token, or all of the user's refresh tokens when none is
/// given. Access tokens stay valid until they expire.
#[utoipa::path(
    post,
    path = "/api/auth/logout",
    tag = AUTH_TAG,
    request_body = LogoutDto,
    responses(
        (status = 200, description = "Logged out", body = OperationDto),
        (status = 401, description = "Not authenticated", body = ErrorDto)
    ),
)]
pub async fn logout(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(payload): Json<LogoutDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &state.token_keys, &headers)
        .require(&[])
        .await?;

    let revoked = AuthService::new(&state.db, &state.token_keys)
        .logout(&user, payload.refresh_token.as_deref())
        .await?;

    tracing::info!(
        "User {} logged out, revoked {} refresh token(s)",
        user.username,
        revoked
    );

    Ok((
        StatusCode::OK,
        Json(OperationDto {
            success: true,
            message: "Logged out".to_string(),
        }),
    ))
}

#[utoipa::path(
    get,
    path = "/api/auth/user",
    tag = AUTH_TAG,
    responses(
        (status = 200, description = "Current user", body = UserDto),
        (status = 401, description = "Not authenticated", body = ErrorDto)
    ),
)]
pub async fn get_user(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &state.token_keys, &headers)
        .require(&[])
        .await?;

    Ok((StatusCode::OK, Json(user.into_dto())))
}

#[cfg(test)]
mod tests {
    use std::{path::PathBuf, sync::Arc};

    use axum::body::to_bytes;
    use test_utils::builder::TestBuilder;

    use super::*;
    use crate::server::service::{
        auth::token::TokenKeys,
        rate_limit::LOGIN_MAX_ATTEMPTS,
        remote::fake::FakeExecutor,
        status::StatusTracker,
    };

    fn state_with(db: sea_orm::DatabaseConnection) -> AppState {
        AppState::new(
            db,
            TokenKeys::new("secret", 60),
            Arc::new(FakeExecutor::default()),
            StatusTracker::new(),
            PathBuf::from("."),
        )
    }

    async fn attempt(
        state: &AppState,
        client: &str,
        username: &str,
    ) -> axum::response::Response {
        login(
            State(state.clone()),
            ClientAddr(client.to_string()),
            Json(LoginDto {
                username: username.to_string(),
                password: "wrong".to_string(),
            }),
        )
        .await
        .into_response()
    }

    /// Tests that login answers 429 once a client exceeds the attempt limit.
    ///
    /// Expected: 401 for the allowed attempts, then 429 with an ErrorDto body, while
    /// another client address can still reach the credential check
    #[tokio::test]
    async fn login_rate_limit_returns_too_many_requests() {
        let test = TestBuilder::new().with_auth_tables().build().await.unwrap();
        let state = state_with(test.db.as_ref().unwrap().clone());

        for _ in 0..LOGIN_MAX_ATTEMPTS {
            let response = attempt(&state, "203.0.113.7", "nobody").await;
            assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
        }

        let response = attempt(&state, "203.0.113.7", "nobody").await;
        assert_eq!(response.status(), StatusCode::TOO_MANY_REQUESTS);

        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let error: ErrorDto = serde_json::from_slice(&body).unwrap();
        assert_eq!(error.error, "Too many login attempts, please wait a minute");

        let other = attempt(&state, "192.0.2.10", "nobody").await;
        assert_eq!(other.status(), StatusCode::UNAUTHORIZED);
    }
}
