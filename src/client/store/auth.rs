use chrono::{DateTime, Duration, Utc};

use crate::model::auth::TokenDto;

pub const ACCESS_TOKEN_KEY: &str = "access_token";
pub const TOKEN_TYPE_KEY: &str = "token_type";
pub const TOKEN_EXPIRES_AT_KEY: &str = "token_expires_at";
pub const REFRESH_TOKEN_KEY: &str = "refresh_token";

pub const TOKEN_KEYS: [&str; 4] = [
    ACCESS_TOKEN_KEY,
    TOKEN_TYPE_KEY,
    TOKEN_EXPIRES_AT_KEY,
    REFRESH_TOKEN_KEY,
];

/// How long before expiry the access token is refreshed.
const REFRESH_MARGIN_MINUTES: i64 = 5;

/// Bearer token as persisted in local storage.
#[derive(Clone, Debug, PartialEq)]
pub struct StoredToken {
    pub access_token: String,
    pub token_type: String,
    pub expires_at: Option<DateTime<Utc>>,
    pub refresh_token: Option<String>,
}

impl StoredToken {
    pub fn from_parts(
        access_token: Option<String>,
        token_type: Option<String>,
        expires_at: Option<String>,
        refresh_token: Option<String>,
    ) -> Option<Self> {
        let access_token = access_token.filter(|token| !token.is_empty())?;

        let expires_at = expires_at
            .and_then(|value| value.trim().parse::<i64>().ok())
            .and_then(|seconds| DateTime::from_timestamp(seconds, 0));

        Some(Self {
            access_token,
            token_type: token_type.unwrap_or_else(|| "bearer".to_string()),
            expires_at,
            refresh_token: refresh_token.filter(|token| !token.is_empty()),
        })
    }

    pub fn from_dto(dto: TokenDto) -> Self {
        Self {
            access_token: dto.access_token,
            token_type: dto.token_type,
            expires_at: DateTime::from_timestamp(dto.expires_at, 0),
            refresh_token: Some(dto.refresh_token),
        }
    }

    /// Key/value pairs to write to local storage.
    pub fn storage_entries(&self) -> Vec<(&'static str, String)> {
        let mut entries = vec![
            (ACCESS_TOKEN_KEY, self.access_token.clone()),
            (TOKEN_TYPE_KEY, self.token_type.clone()),
        ];
        if let Some(expires_at) = self.expires_at {
            entries.push((TOKEN_EXPIRES_AT_KEY, expires_at.timestamp().to_string()));
        }
        if let Some(refresh_token) = &self.refresh_token {
            entries.push((REFRESH_TOKEN_KEY, refresh_token.clone()));
        }
        entries
    }

    pub fn is_valid(&self, now: DateTime<Utc>) -> bool {
        self.expires_at.is_none_or(|expires_at| now < expires_at)
    }

    /// Time left until the token should be refreshed.
    pub fn refresh_delay(&self, now: DateTime<Utc>) -> Option<Duration> {
        let refresh_at = self.expires_at? - Duration::minutes(REFRESH_MARGIN_MINUTES);
        (refresh_at > now).then(|| refresh_at - now)
    }

    /// The API only accepts the `Bearer` scheme, whatever type was stored.
    pub fn authorization_header(&self) -> String {
        format!("Bearer {}", self.access_token)
    }
}

pub fn login_redirect(path: &str) -> String {
    format!("/login?next={}", urlencoding::encode(path))
}

/// Sanitizes the `next` query value so a login can only land on a local page.
pub fn safe_next(next: &str) -> String {
    if next.starts_with('/') && !next.starts_with("//") && !next.starts_with("/login") {
        next.to_string()
    } else {
        "/".to_string()
    }
}
