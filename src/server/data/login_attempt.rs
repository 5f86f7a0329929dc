//! Audit log of login attempts.

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter, QueryOrder, QuerySelect,
};

/// Repository recording every login attempt, successful or not.
pub struct LoginAttemptRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> LoginAttemptRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Appends an attempt stamped with the current time.
    pub async fn record(
        &self,
        username: &str,
        ip_address: &str,
        success: bool,
    ) -> Result<entity::login_attempt::Model, DbErr> {
        entity::login_attempt::ActiveModel {
            username: ActiveValue::Set(username.to_string()),
            ip_address: ActiveValue::Set(ip_address.to_string()),
            success: ActiveValue::Set(success),
            attempted_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }

    /// Most recent attempts for a username, newest first.
    pub async fn recent_for_username(
        &self,
        username: &str,
        limit: u64,
    ) -> Result<Vec<entity::login_attempt::Model>, DbErr> {
        entity::prelude::LoginAttempt::find()
            .filter(entity::login_attempt::Column::Username.eq(username))
            .order_by_desc(entity::login_attempt::Column::AttemptedAt)
            .order_by_desc(entity::login_attempt::Column::Id)
            .limit(limit)
            .all(self.db)
            .await
    }
}
