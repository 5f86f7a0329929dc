//! Server factory for creating test server entities.

use crate::factory::helpers::next_id;
use chrono::{DateTime, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test servers with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// let server = ServerFactory::new(&db)
///     .ip("192.0.2.10")
///     .inbound_tag("Germany VLESS")
///     .build()
///     .await?;
/// ```
pub struct ServerFactory<'a> {
    db: &'a DatabaseConnection,
    ip: String,
    inbound_tag: String,
    install_date: Option<DateTime<Utc>>,
}

impl<'a> ServerFactory<'a> {
    /// Creates a new ServerFactory with default values.
    ///
    /// Defaults:
    /// - ip: `"10.0.{hi}.{lo}"` derived from an auto-incremented id
    /// - inbound_tag: `"Inbound {id}"`
    /// - install_date: now
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            ip: format!("10.0.{}.{}", (id / 256) % 256, id % 256),
            inbound_tag: format!("Inbound {}", id),
            install_date: Some(Utc::now()),
        }
    }

    pub fn ip(mut self, ip: impl Into<String>) -> Self {
        self.ip = ip.into();
        self
    }

    pub fn inbound_tag(mut self, inbound_tag: impl Into<String>) -> Self {
        self.inbound_tag = inbound_tag.into();
        self
    }

    pub fn install_date(mut self, install_date: Option<DateTime<Utc>>) -> Self {
        self.install_date = install_date;
        self
    }

    /// Builds and inserts the server entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::server::Model)` - Created server entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::server::Model, DbErr> {
        entity::server::ActiveModel {
            ip: ActiveValue::Set(self.ip),
            inbound_tag: ActiveValue::Set(self.inbound_tag),
            install_date: ActiveValue::Set(self.install_date),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a server with default values.
pub async fn create_server(db: &DatabaseConnection) -> Result<entity::server::Model, DbErr> {
    ServerFactory::new(db).build().await
}

/// Creates a server with a specific IP address.
pub async fn create_server_with_ip(
    db: &DatabaseConnection,
    ip: impl Into<String>,
) -> Result<entity::server::Model, DbErr> {
    ServerFactory::new(db).ip(ip).build().await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builder::TestBuilder;

    #[tokio::test]
    async fn creates_server_with_defaults() -> Result<(), DbErr> {
        let test = TestBuilder::new().with_server_tables().build().await.unwrap();
        let db = test.db.as_ref().unwrap();

        let server = create_server(db).await?;

        assert!(server.ip.starts_with("10.0."));
        assert!(!server.inbound_tag.is_empty());
        assert!(server.install_date.is_some());

        Ok(())
    }

    #[tokio::test]
    async fn creates_multiple_unique_servers() -> Result<(), DbErr> {
        let test = TestBuilder::new().with_server_tables().build().await.unwrap();
        let db = test.db.as_ref().unwrap();

        let first = create_server(db).await?;
        let second = create_server(db).await?;

        assert_ne!(first.ip, second.ip);

        Ok(())
    }
}
