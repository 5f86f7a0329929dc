//! Password login with account lockout, refresh token rotation and revocation, and
//! first-admin bootstrap.

pub mod token;

use chrono::{DateTime, Duration, Utc};
use dioxus_logger::tracing;
use rand::Rng;
use sea_orm::DatabaseConnection;

use crate::server::{
    data::{
        login_attempt::LoginAttemptRepository, refresh_token::RefreshTokenRepository,
        user::UserRepository,
    },
    error::{auth::AuthError, AppError},
    model::user::{CreateUserParam, TokenPair, User},
    service::auth::token::{TokenKeys, TokenKind},
};

#[cfg(not(test))]
const HASH_COST: u32 = bcrypt::DEFAULT_COST;
#[cfg(test)]
const HASH_COST: u32 = 4;

const GENERATED_PASSWORD_LENGTH: usize = 20;

/// Consecutive failed logins that lock an account.
pub const MAX_FAILED_LOGINS: i32 = 5;
/// How long a locked account refuses logins.
pub const LOCKOUT_MINUTES: i64 = 30;

/// Service for credential checks and JWT handling.
pub struct AuthService<'a> {
    db: &'a DatabaseConnection,
    keys: &'a TokenKeys,
}

impl<'a> AuthService<'a> {
    /// Creates a new AuthService instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    /// - `keys` - Signing keys and access token lifetime
    pub fn new(db: &'a DatabaseConnection, keys: &'a TokenKeys) -> Self {
        Self { db, keys }
    }

    /// Checks a username/password pair and issues tokens. Every attempt is recorded.
    ///
    /// # Arguments
    /// - `username` - Submitted username
    /// - `password` - Submitted password
    /// - `ip_address` - Client address stored with the attempt
    ///
    /// # Returns
    /// - `Ok(TokenPair)` - Credentials matched; the refresh token is stored
    /// - `Err(AppError::AuthErr(InvalidCredentials))` - Unknown user or wrong password
    /// - `Err(AppError::AuthErr(AccountLocked))` - Too many recent failures
    /// - `Err(AppError::AuthErr(AccountDisabled))` - Correct password on a disabled account
    /// - `Err(AppError::DbErr)` - Database error during lookup
    pub async fn login(
        &self,
        username: &str,
        password: &str,
        ip_address: &str,
    ) -> Result<TokenPair, AppError> {
        let now = Utc::now();
        let user_repo = UserRepository::new(self.db);
        let attempts = LoginAttemptRepository::new(self.db);

        let Some(user) = user_repo.find_by_username(username).await? else {
            attempts.record(username, ip_address, false).await?;
            return Err(AuthError::InvalidCredentials(username.to_string()).into());
        };

        if let Some(until) = user.locked_at(now) {
            attempts.record(username, ip_address, false).await?;
            return Err(AuthError::AccountLocked(user.username, until).into());
        }

        if !verify_password(password.to_string(), user.password_hash.clone()).await? {
            let updated = user_repo
                .record_failed_login(
                    user.id,
                    MAX_FAILED_LOGINS,
                    Duration::minutes(LOCKOUT_MINUTES),
                    now,
                )
                .await?;
            attempts.record(username, ip_address, false).await?;

            if let Some(until) = updated.and_then(|u| u.locked_at(now)) {
                tracing::warn!("Locked account {} until {}", user.username, until);
            }

            return Err(AuthError::InvalidCredentials(username.to_string()).into());
        }

        if !user.is_active {
            attempts.record(username, ip_address, false).await?;
            return Err(AuthError::AccountDisabled(user.username).into());
        }

        user_repo.record_successful_login(user.id, now).await?;
        attempts.record(username, ip_address, true).await?;

        tracing::info!("User {} logged in from {}", user.username, ip_address);

        self.issue(&user, now).await
    }

    /// Exchanges a refresh token for a fresh token pair, revoking the one presented.
    ///
    /// The admin flag is re-read from the database so privilege changes apply on refresh.
    ///
    /// # Returns
    /// - `Ok(TokenPair)` - New access and refresh tokens
    /// - `Err(AppError::AuthErr(InvalidToken))` - Token invalid, expired, revoked, unknown
    ///   or not a refresh token
    /// - `Err(AppError::AuthErr(UserNotInDatabase))` - Subject was deleted
    /// - `Err(AppError::AuthErr(AccountDisabled))` - Account was disabled since login
    pub async fn refresh(&self, refresh_token: &str) -> Result<TokenPair, AppError> {
        let now = Utc::now();
        let claims = self.keys.verify(refresh_token, TokenKind::Refresh)?;
        let user_id = claims.user_id()?;
        let token_id = claims.token_id()?;

        let tokens = RefreshTokenRepository::new(self.db);
        if tokens.find_active(user_id, token_id, now).await?.is_none() {
            return Err(
                AuthError::InvalidToken("Refresh token revoked or unknown".to_string()).into(),
            );
        }

        let user = self.find_user(user_id).await?;
        if !user.is_active {
            return Err(AuthError::AccountDisabled(user.username).into());
        }

        // A concurrent refresh with the same token loses here.
        if !tokens.revoke(user_id, token_id).await? {
            return Err(
                AuthError::InvalidToken("Refresh token already used".to_string()).into(),
            );
        }

        self.issue(&user, now).await
    }

    /// Revokes refresh tokens of `user` on logout.
    ///
    /// # Arguments
    /// - `user` - Authenticated user logging out
    /// - `refresh_token` - Token to revoke; `None` revokes every token of the user
    ///
    /// # Returns
    /// - `Ok(u64)` - Number of tokens revoked
    /// - `Err(AppError::AuthErr(InvalidToken))` - Token malformed or issued to someone else
    pub async fn logout(
        &self,
        user: &User,
        refresh_token: Option<&str>,
    ) -> Result<u64, AppError> {
        let tokens = RefreshTokenRepository::new(self.db);

        let Some(refresh_token) = refresh_token else {
            return Ok(tokens.revoke_all_for_user(user.id).await?);
        };

        let claims = self.keys.verify(refresh_token, TokenKind::Refresh)?;
        if claims.user_id()? != user.id {
            return Err(AuthError::InvalidToken(format!(
                "Refresh token of user {} presented by user {}",
                claims.sub, user.id
            ))
            .into());
        }

        let revoked = tokens.revoke(user.id, claims.token_id()?).await?;

        Ok(u64::from(revoked))
    }

    /// Resolves the user behind an access token.
    ///
    /// # Returns
    /// - `Ok(User)` - Token valid and user present
    /// - `Err(AppError::AuthErr)` - Token invalid, user no longer exists or is disabled
    pub async fn authenticate(&self, access_token: &str) -> Result<User, AppError> {
        let claims = self.keys.verify(access_token, TokenKind::Access)?;
        let user = self.find_user(claims.user_id()?).await?;

        if !user.is_active {
            return Err(AuthError::AccountDisabled(user.username).into());
        }

        Ok(user)
    }

    /// Creates the first admin when the user table is empty.
    ///
    /// # Arguments
    /// - `username` - Name of the admin account
    /// - `password` - Configured password; a random one is generated when `None`
    ///
    /// # Returns
    /// - `Ok(Some(password))` - An admin was created with a generated password
    /// - `Ok(None)` - Users already exist, or the configured password was used
    /// - `Err(AppError)` - Hashing or database failure
    pub async fn bootstrap_admin(
        &self,
        username: &str,
        password: Option<String>,
    ) -> Result<Option<String>, AppError> {
        let user_repo = UserRepository::new(self.db);

        if user_repo.count().await? > 0 {
            return Ok(None);
        }

        let (password, generated) = match password {
            Some(password) => (password, false),
            None => (generate_password(), true),
        };

        let password_hash = hash_password(password.clone()).await?;

        user_repo
            .create(CreateUserParam {
                username: username.to_string(),
                password_hash,
                admin: true,
            })
            .await?;

        tracing::info!("Created admin user {}", username);

        Ok(generated.then_some(password))
    }

    async fn issue(&self, user: &User, now: DateTime<Utc>) -> Result<TokenPair, AppError> {
        let pair = self.keys.issue(user.id, user.admin, now)?;

        RefreshTokenRepository::new(self.db)
            .create(user.id, &pair.refresh_token_id, pair.refresh_expires_at)
            .await?;

        Ok(pair)
    }

    async fn find_user(&self, user_id: i32) -> Result<User, AppError> {
        UserRepository::new(self.db)
            .find_by_id(user_id)
            .await?
            .ok_or_else(|| AuthError::UserNotInDatabase(user_id).into())
    }
}

/// Hashes a password off the async runtime.
pub async fn hash_password(password: String) -> Result<String, AppError> {
    tokio::task::spawn_blocking(move || bcrypt::hash(password, HASH_COST))
        .await
        .map_err(|e| AppError::InternalError(format!("Password hashing task failed: {}", e)))?
        .map_err(AppError::from)
}

/// Verifies a password off the async runtime. Malformed hashes never match.
async fn verify_password(password: String, hash: String) -> Result<bool, AppError> {
    let matched = tokio::task::spawn_blocking(move || bcrypt::verify(password, &hash))
        .await
        .map_err(|e| AppError::InternalError(format!("Password check task failed: {}", e)))?;

    Ok(matched.unwrap_or(false))
}

fn generate_password() -> String {
    const CHARSET: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ\
                             abcdefghijklmnopqrstuvwxyz\
                             0123456789";

    let mut rng = rand::rng();

    (0..GENERATED_PASSWORD_LENGTH)
        .map(|_| {
            let idx = rng.random_range(0..CHARSET.len());
            CHARSET[idx] as char
        })
        .collect()
}

#[cfg(test)]
mod test;
