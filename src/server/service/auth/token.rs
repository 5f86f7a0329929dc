//! JWT issuing and verification.

use chrono::{DateTime, Duration, Utc};
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use rand::{distr::Alphanumeric, Rng};
use serde::{Deserialize, Serialize};

use crate::server::{
    error::{auth::AuthError, AppError},
    model::user::TokenPair,
};

/// Refresh tokens outlive access tokens by a fixed week.
pub const REFRESH_TOKEN_TTL_DAYS: i64 = 7;

const TOKEN_ID_LENGTH: usize = 32;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TokenKind {
    Access,
    Refresh,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    /// User id as a string.
    pub sub: String,
    pub admin: bool,
    pub kind: TokenKind,
    pub iat: i64,
    pub exp: i64,
    /// Set on refresh tokens only; matches the stored refresh token row.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub jti: Option<String>,
}

impl Claims {
    /// Parses the subject back into a user id.
    pub fn user_id(&self) -> Result<i32, AuthError> {
        self.sub
            .parse::<i32>()
            .map_err(|_| AuthError::InvalidToken(format!("Malformed subject '{}'", self.sub)))
    }

    pub fn token_id(&self) -> Result<&str, AuthError> {
        self.jti
            .as_deref()
            .ok_or_else(|| AuthError::InvalidToken("Refresh token without jti".to_string()))
    }
}

/// HS256 keys plus the access token lifetime.
#[derive(Clone)]
pub struct TokenKeys {
    encoding: EncodingKey,
    decoding: DecodingKey,
    access_ttl: Duration,
}

impl TokenKeys {
    pub fn new(secret: &str, access_ttl_minutes: i64) -> Self {
        Self {
            encoding: EncodingKey::from_secret(secret.as_bytes()),
            decoding: DecodingKey::from_secret(secret.as_bytes()),
            access_ttl: Duration::minutes(access_ttl_minutes),
        }
    }

    /// Issues an access/refresh pair for a user. The refresh token gets a fresh random `jti`.
    ///
    /// # Arguments
    /// - `user_id` - Subject of both tokens
    /// - `admin` - Admin flag copied into the claims
    /// - `now` - Issue time
    ///
    /// # Returns
    /// - `Ok(TokenPair)` - Signed tokens with the access token expiry
    /// - `Err(AppError::InternalError)` - Signing failed
    pub fn issue(
        &self,
        user_id: i32,
        admin: bool,
        now: DateTime<Utc>,
    ) -> Result<TokenPair, AppError> {
        let expires_at = now + self.access_ttl;
        let refresh_expires_at = now + Duration::days(REFRESH_TOKEN_TTL_DAYS);
        let refresh_token_id = new_token_id();

        let access_token = self.sign(user_id, admin, TokenKind::Access, now, expires_at, None)?;
        let refresh_token = self.sign(
            user_id,
            admin,
            TokenKind::Refresh,
            now,
            refresh_expires_at,
            Some(refresh_token_id.clone()),
        )?;

        Ok(TokenPair {
            access_token,
            refresh_token,
            expires_at,
            refresh_token_id,
            refresh_expires_at,
        })
    }

    /// Verifies signature and expiry, then checks the token is of the expected kind.
    ///
    /// # Returns
    /// - `Ok(Claims)` - Valid token of kind `expected`
    /// - `Err(AuthError::InvalidToken)` - Bad signature, expired, malformed or wrong kind
    pub fn verify(&self, token: &str, expected: TokenKind) -> Result<Claims, AuthError> {
        let data = decode::<Claims>(token, &self.decoding, &Validation::new(Algorithm::HS256))
            .map_err(|e| AuthError::InvalidToken(e.to_string()))?;

        if data.claims.kind != expected {
            return Err(AuthError::InvalidToken(format!(
                "Expected {:?} token, got {:?}",
                expected, data.claims.kind
            )));
        }

        Ok(data.claims)
    }

    fn sign(
        &self,
        user_id: i32,
        admin: bool,
        kind: TokenKind,
        issued_at: DateTime<Utc>,
        expires_at: DateTime<Utc>,
        jti: Option<String>,
    ) -> Result<String, AppError> {
        let claims = Claims {
            sub: user_id.to_string(),
            admin,
            kind,
            iat: issued_at.timestamp(),
            exp: expires_at.timestamp(),
            jti,
        };

        encode(&Header::default(), &claims, &self.encoding)
            .map_err(|e| AppError::InternalError(format!("Failed to sign token: {}", e)))
    }
}

fn new_token_id() -> String {
    rand::rng()
        .sample_iter(&Alphanumeric)
        .take(TOKEN_ID_LENGTH)
        .map(char::from)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn issued_tokens_verify_with_their_kind() {
        let keys = TokenKeys::new("secret", 60);
        let now = Utc::now();
        let pair = keys.issue(7, true, now).unwrap();

        let access = keys.verify(&pair.access_token, TokenKind::Access).unwrap();
        assert_eq!(access.user_id().unwrap(), 7);
        assert!(access.admin);
        assert_eq!(pair.expires_at.timestamp(), access.exp);

        let refresh = keys.verify(&pair.refresh_token, TokenKind::Refresh).unwrap();
        assert_eq!(refresh.exp - refresh.iat, REFRESH_TOKEN_TTL_DAYS * 24 * 3600);
        assert_eq!(refresh.token_id().unwrap(), pair.refresh_token_id);
        assert!(access.jti.is_none());
    }

    #[test]
    fn each_pair_gets_its_own_token_id() {
        let keys = TokenKeys::new("secret", 60);
        let now = Utc::now();

        let first = keys.issue(1, false, now).unwrap();
        let second = keys.issue(1, false, now).unwrap();

        assert_eq!(first.refresh_token_id.len(), TOKEN_ID_LENGTH);
        assert_ne!(first.refresh_token_id, second.refresh_token_id);
        assert_ne!(first.refresh_token, second.refresh_token);
    }

    #[test]
    fn rejects_token_of_the_wrong_kind() {
        let keys = TokenKeys::new("secret", 60);
        let pair = keys.issue(1, false, Utc::now()).unwrap();

        assert!(keys.verify(&pair.access_token, TokenKind::Refresh).is_err());
        assert!(keys.verify(&pair.refresh_token, TokenKind::Access).is_err());
    }

    #[test]
    fn rejects_expired_and_foreign_tokens() {
        let keys = TokenKeys::new("secret", 60);
        let expired = keys
            .issue(1, false, Utc::now() - Duration::hours(3))
            .unwrap();
        assert!(keys.verify(&expired.access_token, TokenKind::Access).is_err());

        let other = TokenKeys::new("other-secret", 60);
        let foreign = other.issue(1, false, Utc::now()).unwrap();
        assert!(keys.verify(&foreign.access_token, TokenKind::Access).is_err());
    }
}
