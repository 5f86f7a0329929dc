use sea_orm_migration::{prelude::*, schema::*};

use super::m20260110_000001_create_user_table::User;

#[derive(DeriveMigrationName)]
pub struct Migration;

// SQLite accepts a single change per ALTER TABLE.
#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        let columns = [
            boolean(UserLockout::IsActive).default(true).to_owned(),
            integer(UserLockout::FailedAttempts).default(0).to_owned(),
            timestamp_with_time_zone_null(UserLockout::LockedUntil),
            timestamp_with_time_zone_null(UserLockout::LastLogin),
        ];

        for column in columns {
            manager
                .alter_table(
                    Table::alter()
                        .table(User::Table)
                        .add_column(column)
                        .to_owned(),
                )
                .await?;
        }

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        for column in [
            UserLockout::LastLogin,
            UserLockout::LockedUntil,
            UserLockout::FailedAttempts,
            UserLockout::IsActive,
        ] {
            manager
                .alter_table(
                    Table::alter()
                        .table(User::Table)
                        .drop_column(column)
                        .to_owned(),
                )
                .await?;
        }

        Ok(())
    }
}

#[derive(DeriveIden)]
enum UserLockout {
    IsActive,
    FailedAttempts,
    LockedUntil,
    LastLogin,
}
