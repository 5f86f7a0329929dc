//! User domain model and parameter types.

use chrono::{DateTime, Utc};

use crate::model::auth::{TokenDto, UserDto};

/// A dashboard user as stored in the database, including the password hash.
#[derive(Debug, Clone)]
pub struct User {
    pub id: i32,
    pub username: String,
    pub password_hash: String,
    pub admin: bool,
    pub is_active: bool,
    pub failed_attempts: i32,
    pub locked_until: Option<DateTime<Utc>>,
}

impl User {
    pub fn from_entity(entity: entity::user::Model) -> Self {
        Self {
            id: entity.id,
            username: entity.username,
            password_hash: entity.password_hash,
            admin: entity.admin,
            is_active: entity.is_active,
            failed_attempts: entity.failed_attempts,
            locked_until: entity.locked_until,
        }
    }

    /// Lock expiry when the account is locked at `now`.
    pub fn locked_at(&self, now: DateTime<Utc>) -> Option<DateTime<Utc>> {
        self.locked_until.filter(|until| *until > now)
    }

    pub fn into_dto(self) -> UserDto {
        UserDto {
            id: self.id,
            username: self.username,
            admin: self.admin,
        }
    }
}

/// Parameters for creating a user with an already hashed password.
#[derive(Debug, Clone)]
pub struct CreateUserParam {
    pub username: String,
    pub password_hash: String,
    pub admin: bool,
}

/// A refresh token as recorded at issue time, identified by its `jti` claim.
#[derive(Debug, Clone)]
pub struct StoredRefreshToken {
    pub id: i32,
    pub user_id: i32,
    pub token_id: String,
    pub expires_at: DateTime<Utc>,
    pub revoked: bool,
}

impl StoredRefreshToken {
    pub fn from_entity(entity: entity::refresh_token::Model) -> Self {
        Self {
            id: entity.id,
            user_id: entity.user_id,
            token_id: entity.token_id,
            expires_at: entity.expires_at,
            revoked: entity.revoked,
        }
    }
}

/// Access and refresh tokens issued together on login or refresh.
#[derive(Debug, Clone)]
pub struct TokenPair {
    pub access_token: String,
    pub refresh_token: String,
    pub expires_at: DateTime<Utc>,
    /// `jti` of `refresh_token`.
    pub refresh_token_id: String,
    pub refresh_expires_at: DateTime<Utc>,
}

impl TokenPair {
    pub fn into_dto(self) -> TokenDto {
        TokenDto {
            access_token: self.access_token,
            token_type: "bearer".to_string(),
            expires_at: self.expires_at.timestamp(),
            refresh_token: self.refresh_token,
        }
    }
}
