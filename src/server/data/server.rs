//! Server data repository for database operations.
//!
//! Provides the `ServerRepository` for managing registered servers. Server rows are keyed
//! by IP address; renaming a server cascades to its events through the foreign key.

use chrono::Utc;
use sea_orm::{
    sea_query::{Expr, OnConflict},
    ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter, QueryOrder,
};

use crate::server::model::server::{Server, UpdateServerParam, UpsertServerParam};

/// Repository providing database operations for server management.
pub struct ServerRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ServerRepository<'a> {
    /// Creates a new ServerRepository instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Inserts a server or refreshes an existing one.
    ///
    /// A fresh row gets the current time as install date. When the IP already exists the
    /// inbound tag is replaced and the install date reset, matching a re-provisioned host.
    ///
    /// # Arguments
    /// - `param` - IP and inbound tag of the server
    ///
    /// # Returns
    /// - `Ok(Server)` - The created or updated server
    /// - `Err(DbErr)` - Database error during insert
    pub async fn upsert(&self, param: UpsertServerParam) -> Result<Server, DbErr> {
        let entity = entity::prelude::Server::insert(entity::server::ActiveModel {
            ip: ActiveValue::Set(param.ip),
            inbound_tag: ActiveValue::Set(param.inbound_tag),
            install_date: ActiveValue::Set(Some(Utc::now())),
        })
        .on_conflict(
            OnConflict::column(entity::server::Column::Ip)
                .update_columns([
                    entity::server::Column::InboundTag,
                    entity::server::Column::InstallDate,
                ])
                .to_owned(),
        )
        .exec_with_returning(self.db)
        .await?;

        Ok(Server::from_entity(entity))
    }

    /// Gets all servers ordered by IP.
    pub async fn get_all(&self) -> Result<Vec<Server>, DbErr> {
        let entities = entity::prelude::Server::find()
            .order_by_asc(entity::server::Column::Ip)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Server::from_entity).collect())
    }

    /// Finds a server by its IP address.
    ///
    /// # Returns
    /// - `Ok(Some(Server))` - Server found
    /// - `Ok(None)` - No server registered with that IP
    /// - `Err(DbErr)` - Database error during query
    pub async fn find_by_ip(&self, ip: &str) -> Result<Option<Server>, DbErr> {
        let entity = entity::prelude::Server::find_by_id(ip.to_string())
            .one(self.db)
            .await?;

        Ok(entity.map(Server::from_entity))
    }

    /// Changes the IP and inbound tag of an existing server.
    ///
    /// The install date is left untouched. Events follow the new IP through the
    /// `ON UPDATE CASCADE` foreign key.
    ///
    /// # Returns
    /// - `Ok(Some(Server))` - The updated server
    /// - `Ok(None)` - No server exists with `old_ip`
    /// - `Err(DbErr)` - Database error, including a primary key clash on `new_ip`
    pub async fn update(&self, param: UpdateServerParam) -> Result<Option<Server>, DbErr> {
        let result = entity::prelude::Server::update_many()
            .col_expr(entity::server::Column::Ip, Expr::value(param.new_ip.clone()))
            .col_expr(
                entity::server::Column::InboundTag,
                Expr::value(param.inbound_tag),
            )
            .filter(entity::server::Column::Ip.eq(param.old_ip))
            .exec(self.db)
            .await?;

        if result.rows_affected == 0 {
            return Ok(None);
        }

        self.find_by_ip(&param.new_ip).await
    }

    /// Deletes a server and, through the foreign key, its events.
    ///
    /// # Returns
    /// - `Ok(true)` - Server was deleted
    /// - `Ok(false)` - No server with that IP existed
    /// - `Err(DbErr)` - Database error during delete
    pub async fn delete(&self, ip: &str) -> Result<bool, DbErr> {
        let result = entity::prelude::Server::delete_by_id(ip.to_string())
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }
}
