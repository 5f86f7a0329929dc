//! Refresh token data repository.
//!
//! Only the `jti` of each issued refresh token is stored. A refresh token is accepted
//! while its row exists, is not revoked and has not expired.

use chrono::{DateTime, Utc};
use sea_orm::{
    sea_query::Expr, ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr,
    EntityTrait, QueryFilter,
};

use crate::server::model::user::StoredRefreshToken;

/// Repository providing database operations for issued refresh tokens.
pub struct RefreshTokenRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> RefreshTokenRepository<'a> {
    /// Creates a new RefreshTokenRepository instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Records a newly issued refresh token.
    ///
    /// # Returns
    /// - `Ok(StoredRefreshToken)` - The stored token
    /// - `Err(DbErr)` - Database error, including an unknown user or a reused `token_id`
    pub async fn create(
        &self,
        user_id: i32,
        token_id: &str,
        expires_at: DateTime<Utc>,
    ) -> Result<StoredRefreshToken, DbErr> {
        let entity = entity::refresh_token::ActiveModel {
            user_id: ActiveValue::Set(user_id),
            token_id: ActiveValue::Set(token_id.to_string()),
            expires_at: ActiveValue::Set(expires_at),
            revoked: ActiveValue::Set(false),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(StoredRefreshToken::from_entity(entity))
    }

    /// Finds a token that can still be exchanged at `now`.
    ///
    /// # Returns
    /// - `Ok(Some(StoredRefreshToken))` - Token belongs to `user_id`, is unrevoked and unexpired
    /// - `Ok(None)` - Token unknown, revoked, expired or issued to another user
    /// - `Err(DbErr)` - Database error during query
    pub async fn find_active(
        &self,
        user_id: i32,
        token_id: &str,
        now: DateTime<Utc>,
    ) -> Result<Option<StoredRefreshToken>, DbErr> {
        let entity = entity::prelude::RefreshToken::find()
            .filter(entity::refresh_token::Column::TokenId.eq(token_id))
            .filter(entity::refresh_token::Column::UserId.eq(user_id))
            .filter(entity::refresh_token::Column::Revoked.eq(false))
            .filter(entity::refresh_token::Column::ExpiresAt.gt(now))
            .one(self.db)
            .await?;

        Ok(entity.map(StoredRefreshToken::from_entity))
    }

    /// Revokes a single token.
    ///
    /// # Returns
    /// - `Ok(true)` - An unrevoked token of `user_id` was revoked
    /// - `Ok(false)` - Nothing matched
    /// - `Err(DbErr)` - Database error during update
    pub async fn revoke(&self, user_id: i32, token_id: &str) -> Result<bool, DbErr> {
        let result = entity::prelude::RefreshToken::update_many()
            .col_expr(entity::refresh_token::Column::Revoked, Expr::value(true))
            .filter(entity::refresh_token::Column::TokenId.eq(token_id))
            .filter(entity::refresh_token::Column::UserId.eq(user_id))
            .filter(entity::refresh_token::Column::Revoked.eq(false))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }

    /// Revokes every outstanding token of a user, returning how many were revoked.
    pub async fn revoke_all_for_user(&self, user_id: i32) -> Result<u64, DbErr> {
        let result = entity::prelude::RefreshToken::update_many()
            .col_expr(entity::refresh_token::Column::Revoked, Expr::value(true))
            .filter(entity::refresh_token::Column::UserId.eq(user_id))
            .filter(entity::refresh_token::Column::Revoked.eq(false))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }
}
