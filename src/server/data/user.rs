//! User data repository for database operations.
//!
//! Provides the `UserRepository` for managing dashboard accounts. Passwords arrive
//! already hashed; this layer never sees plaintext.

use chrono::{DateTime, Duration, Utc};
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    IntoActiveModel, PaginatorTrait, QueryFilter,
};

use crate::server::model::user::{CreateUserParam, User};

/// Repository providing database operations for user management.
pub struct UserRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> UserRepository<'a> {
    /// Creates a new UserRepository instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a user.
    ///
    /// # Returns
    /// - `Ok(User)` - The created user
    /// - `Err(DbErr)` - Database error, including a duplicate username
    pub async fn create(&self, param: CreateUserParam) -> Result<User, DbErr> {
        let entity = entity::user::ActiveModel {
            username: ActiveValue::Set(param.username),
            password_hash: ActiveValue::Set(param.password_hash),
            admin: ActiveValue::Set(param.admin),
            is_active: ActiveValue::Set(true),
            failed_attempts: ActiveValue::Set(0),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(User::from_entity(entity))
    }

    /// Finds a user by ID.
    pub async fn find_by_id(&self, id: i32) -> Result<Option<User>, DbErr> {
        let entity = entity::prelude::User::find_by_id(id).one(self.db).await?;

        Ok(entity.map(User::from_entity))
    }

    /// Finds a user by username.
    ///
    /// # Returns
    /// - `Ok(Some(User))` - User found
    /// - `Ok(None)` - No user with that username
    /// - `Err(DbErr)` - Database error during query
    pub async fn find_by_username(&self, username: &str) -> Result<Option<User>, DbErr> {
        let entity = entity::prelude::User::find()
            .filter(entity::user::Column::Username.eq(username))
            .one(self.db)
            .await?;

        Ok(entity.map(User::from_entity))
    }

    /// Counts all users.
    ///
    /// Used at startup to decide whether the bootstrap admin must be created.
    pub async fn count(&self) -> Result<u64, DbErr> {
        entity::prelude::User::find().count(self.db).await
    }

    /// Counts a failed password check and locks the account once `lock_after` consecutive
    /// failures are reached.
    ///
    /// # Arguments
    /// - `id` - User whose password did not match
    /// - `lock_after` - Failure count that triggers the lock
    /// - `lock_for` - How long the lock lasts
    /// - `now` - Time of the failed attempt
    ///
    /// # Returns
    /// - `Ok(Some(User))` - Updated user; `locked_until` is set when the lock kicked in
    /// - `Ok(None)` - No user with that ID
    /// - `Err(DbErr)` - Database error during update
    pub async fn record_failed_login(
        &self,
        id: i32,
        lock_after: i32,
        lock_for: Duration,
        now: DateTime<Utc>,
    ) -> Result<Option<User>, DbErr> {
        let Some(entity) = entity::prelude::User::find_by_id(id).one(self.db).await? else {
            return Ok(None);
        };

        let failed_attempts = entity.failed_attempts + 1;
        let mut active = entity.into_active_model();
        active.failed_attempts = ActiveValue::Set(failed_attempts);
        if failed_attempts >= lock_after {
            active.locked_until = ActiveValue::Set(Some(now + lock_for));
        }

        let updated = active.update(self.db).await?;

        Ok(Some(User::from_entity(updated)))
    }

    /// Clears the failure counter and any lock, and stamps the login time.
    pub async fn record_successful_login(&self, id: i32, now: DateTime<Utc>) -> Result<(), DbErr> {
        entity::user::ActiveModel {
            id: ActiveValue::Unchanged(id),
            failed_attempts: ActiveValue::Set(0),
            locked_until: ActiveValue::Set(None),
            last_login: ActiveValue::Set(Some(now)),
            ..Default::default()
        }
        .update(self.db)
        .await?;

        Ok(())
    }
}
