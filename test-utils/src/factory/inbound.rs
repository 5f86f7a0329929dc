//! Inbound factory for creating VLESS key records.

use crate::factory::helpers::next_id;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

pub struct InboundFactory<'a> {
    db: &'a DatabaseConnection,
    inbound_tag: String,
    server_name: String,
    vless_key: String,
    domain: String,
}

impl<'a> InboundFactory<'a> {
    /// Creates a new InboundFactory with defaults derived from an auto-incremented id.
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            inbound_tag: format!("Inbound {}", id),
            server_name: format!("node{}.example.com", id),
            vless_key: format!("vless://key-{}@node{}.example.com:443", id, id),
            domain: "example.com".to_string(),
        }
    }

    pub fn inbound_tag(mut self, inbound_tag: impl Into<String>) -> Self {
        self.inbound_tag = inbound_tag.into();
        self
    }

    pub fn domain(mut self, domain: impl Into<String>) -> Self {
        self.domain = domain.into();
        self
    }

    pub async fn build(self) -> Result<entity::inbound::Model, DbErr> {
        entity::inbound::ActiveModel {
            inbound_tag: ActiveValue::Set(self.inbound_tag),
            server_name: ActiveValue::Set(self.server_name),
            vless_key: ActiveValue::Set(self.vless_key),
            domain: ActiveValue::Set(self.domain),
        }
        .insert(self.db)
        .await
    }
}

/// Creates an inbound with the given tag.
pub async fn create_inbound(
    db: &DatabaseConnection,
    inbound_tag: &str,
) -> Result<entity::inbound::Model, DbErr> {
    InboundFactory::new(db).inbound_tag(inbound_tag).build().await
}
