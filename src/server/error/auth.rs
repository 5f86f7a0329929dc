use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use chrono::{DateTime, Utc};
use dioxus_logger::tracing;
use thiserror::Error;

use crate::model::api::ErrorDto;

#[derive(Error, Debug)]
pub enum AuthError {
    /// Request carried no `Authorization: Bearer` header.
    #[error("Missing bearer token")]
    MissingToken,

    /// Token failed signature, expiry or kind validation.
    #[error("Invalid token: {0}")]
    InvalidToken(String),

    /// Username unknown or password mismatch during login.
    #[error("Invalid credentials for user {0}")]
    InvalidCredentials(String),

    /// Token subject no longer exists in the database.
    #[error("User {0} referenced by token no longer exists")]
    UserNotInDatabase(i32),

    /// Too many failed logins; the account refuses logins until the given time.
    #[error("Account {0} is locked until {1}")]
    AccountLocked(String, DateTime<Utc>),

    /// The account exists but has been deactivated.
    #[error("Account {0} is disabled")]
    AccountDisabled(String),

    /// Authenticated user lacks a required permission.
    #[error("User {0} denied access: {1}")]
    AccessDenied(i32, String),
}

/// Converts authentication errors into HTTP responses.
///
/// - `MissingToken` / `InvalidToken` / `UserNotInDatabase` → 401 Unauthorized
/// - `InvalidCredentials` → 401 Unauthorized with "Invalid username or password"
/// - `AccountLocked` → 423 Locked with the lock expiry
/// - `AccountDisabled` / `AccessDenied` → 403 Forbidden
///
/// Details are logged at debug level while client-facing messages stay generic.
impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        tracing::debug!("{}", self);

        match self {
            Self::MissingToken | Self::InvalidToken(_) | Self::UserNotInDatabase(_) => (
                StatusCode::UNAUTHORIZED,
                Json(ErrorDto {
                    error: "Not authenticated".to_string(),
                }),
            )
                .into_response(),
            Self::InvalidCredentials(_) => (
                StatusCode::UNAUTHORIZED,
                Json(ErrorDto {
                    error: "Invalid username or password".to_string(),
                }),
            )
                .into_response(),
            Self::AccountLocked(_, until) => (
                StatusCode::LOCKED,
                Json(ErrorDto {
                    error: format!("Account locked until {}", until.to_rfc3339()),
                }),
            )
                .into_response(),
            Self::AccountDisabled(_) => (
                StatusCode::FORBIDDEN,
                Json(ErrorDto {
                    error: "Account is disabled".to_string(),
                }),
            )
                .into_response(),
            Self::AccessDenied(_, _) => (
                StatusCode::FORBIDDEN,
                Json(ErrorDto {
                    error: "You don't have permission to perform this action".to_string(),
                }),
            )
                .into_response(),
        }
    }
}
