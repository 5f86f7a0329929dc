//! Server event data repository.
//!
//! Events are append-only; they are removed only when their server is deleted.

use chrono::{DateTime, Utc};
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter,
    QueryOrder, QuerySelect,
};

use crate::server::{
    error::AppError,
    model::event::{CreateServerEventParam, ServerEvent},
};

pub struct ServerEventRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ServerEventRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Records a new event.
    ///
    /// # Returns
    /// - `Ok(ServerEvent)` - The stored event
    /// - `Err(AppError::DbErr)` - Insert failed, e.g. the server IP is not registered
    pub async fn create(&self, param: CreateServerEventParam) -> Result<ServerEvent, AppError> {
        let entity = entity::server_event::ActiveModel {
            server_ip: ActiveValue::Set(param.server_ip),
            event_type: ActiveValue::Set(param.event_type.as_str().to_string()),
            event_time: ActiveValue::Set(param.event_time),
            duration_seconds: ActiveValue::Set(param.duration_seconds),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        ServerEvent::from_entity(entity)
    }

    /// Gets events at or after `since`, newest first.
    ///
    /// # Arguments
    /// - `since` - Inclusive lower bound on event time
    /// - `server_ip` - Restrict to one server when provided
    /// - `limit` - Maximum number of events returned
    pub async fn get_since(
        &self,
        since: DateTime<Utc>,
        server_ip: Option<&str>,
        limit: u64,
    ) -> Result<Vec<ServerEvent>, AppError> {
        let mut query = entity::prelude::ServerEvent::find()
            .filter(entity::server_event::Column::EventTime.gte(since));

        if let Some(ip) = server_ip {
            query = query.filter(entity::server_event::Column::ServerIp.eq(ip));
        }

        let entities = query
            .order_by_desc(entity::server_event::Column::EventTime)
            .order_by_desc(entity::server_event::Column::Id)
            .limit(limit)
            .all(self.db)
            .await?;

        entities.into_iter().map(ServerEvent::from_entity).collect()
    }

    /// Gets every event of one server at or after `since`, oldest first.
    pub async fn get_for_server_since(
        &self,
        server_ip: &str,
        since: DateTime<Utc>,
    ) -> Result<Vec<ServerEvent>, AppError> {
        let entities = entity::prelude::ServerEvent::find()
            .filter(entity::server_event::Column::ServerIp.eq(server_ip))
            .filter(entity::server_event::Column::EventTime.gte(since))
            .order_by_asc(entity::server_event::Column::EventTime)
            .order_by_asc(entity::server_event::Column::Id)
            .all(self.db)
            .await?;

        entities.into_iter().map(ServerEvent::from_entity).collect()
    }

    /// Gets the most recent event of a server strictly before `before`.
    pub async fn last_before(
        &self,
        server_ip: &str,
        before: DateTime<Utc>,
    ) -> Result<Option<ServerEvent>, AppError> {
        let entity = entity::prelude::ServerEvent::find()
            .filter(entity::server_event::Column::ServerIp.eq(server_ip))
            .filter(entity::server_event::Column::EventTime.lt(before))
            .order_by_desc(entity::server_event::Column::EventTime)
            .order_by_desc(entity::server_event::Column::Id)
            .one(self.db)
            .await?;

        entity.map(ServerEvent::from_entity).transpose()
    }

    /// Gets the most recent event of a server regardless of age.
    pub async fn latest_for_server(&self, server_ip: &str) -> Result<Option<ServerEvent>, AppError> {
        let entity = entity::prelude::ServerEvent::find()
            .filter(entity::server_event::Column::ServerIp.eq(server_ip))
            .order_by_desc(entity::server_event::Column::EventTime)
            .order_by_desc(entity::server_event::Column::Id)
            .one(self.db)
            .await?;

        entity.map(ServerEvent::from_entity).transpose()
    }
}
