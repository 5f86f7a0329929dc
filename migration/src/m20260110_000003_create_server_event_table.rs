use sea_orm_migration::{prelude::*, schema::*};

use super::m20260110_000002_create_server_table::Server;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(ServerEvent::Table)
                    .if_not_exists()
                    .col(pk_auto(ServerEvent::Id))
                    .col(string(ServerEvent::ServerIp))
                    .col(string(ServerEvent::EventType))
                    .col(timestamp_with_time_zone(ServerEvent::EventTime))
                    .col(big_integer_null(ServerEvent::DurationSeconds))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_server_event_server_ip")
                            .from(ServerEvent::Table, ServerEvent::ServerIp)
                            .to(Server::Table, Server::Ip)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_server_event_server_ip_time")
                    .table(ServerEvent::Table)
                    .col(ServerEvent::ServerIp)
                    .col(ServerEvent::EventTime)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(ServerEvent::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum ServerEvent {
    Table,
    Id,
    ServerIp,
    EventType,
    EventTime,
    DurationSeconds,
}
