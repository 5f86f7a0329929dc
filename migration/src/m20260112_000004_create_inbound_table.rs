use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Inbound::Table)
                    .if_not_exists()
                    .col(string(Inbound::InboundTag).primary_key())
                    .col(string(Inbound::ServerName))
                    .col(text(Inbound::VlessKey))
                    .col(string(Inbound::Domain))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Inbound::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Inbound {
    Table,
    InboundTag,
    ServerName,
    VlessKey,
    Domain,
}
