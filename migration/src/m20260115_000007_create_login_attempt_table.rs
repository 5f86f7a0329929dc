use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(LoginAttempt::Table)
                    .if_not_exists()
                    .col(pk_auto(LoginAttempt::Id))
                    .col(string(LoginAttempt::Username))
                    .col(string(LoginAttempt::IpAddress))
                    .col(boolean(LoginAttempt::Success))
                    .col(
                        timestamp_with_time_zone(LoginAttempt::AttemptedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_login_attempt_ip_address")
                    .table(LoginAttempt::Table)
                    .col(LoginAttempt::IpAddress)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(LoginAttempt::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum LoginAttempt {
    Table,
    Id,
    Username,
    IpAddress,
    Success,
    AttemptedAt,
}
