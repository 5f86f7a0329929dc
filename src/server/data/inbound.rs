//! Inbound data repository.

use sea_orm::{
    sea_query::OnConflict, ActiveValue, DatabaseConnection, DbErr, EntityTrait, QueryOrder,
};

use crate::server::model::inbound::Inbound;

pub struct InboundRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> InboundRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets all inbounds ordered by tag.
    pub async fn get_all(&self) -> Result<Vec<Inbound>, DbErr> {
        let entities = entity::prelude::Inbound::find()
            .order_by_asc(entity::inbound::Column::InboundTag)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Inbound::from_entity).collect())
    }

    /// Inserts an inbound or replaces the record with the same tag.
    pub async fn upsert(&self, inbound: Inbound) -> Result<Inbound, DbErr> {
        let entity = entity::prelude::Inbound::insert(entity::inbound::ActiveModel {
            inbound_tag: ActiveValue::Set(inbound.inbound_tag),
            server_name: ActiveValue::Set(inbound.server_name),
            vless_key: ActiveValue::Set(inbound.vless_key),
            domain: ActiveValue::Set(inbound.domain),
        })
        .on_conflict(
            OnConflict::column(entity::inbound::Column::InboundTag)
                .update_columns([
                    entity::inbound::Column::ServerName,
                    entity::inbound::Column::VlessKey,
                    entity::inbound::Column::Domain,
                ])
                .to_owned(),
        )
        .exec_with_returning(self.db)
        .await?;

        Ok(Inbound::from_entity(entity))
    }

    /// Gets the distinct inbound tags in tag order.
    pub async fn tags(&self) -> Result<Vec<String>, DbErr> {
        Ok(self
            .get_all()
            .await?
            .into_iter()
            .map(|inbound| inbound.inbound_tag)
            .collect())
    }
}
