//! Inbound (VLESS key) records offered in the add and setup forms.

use dioxus_logger::tracing;
use sea_orm::DatabaseConnection;

use crate::server::{
    data::inbound::InboundRepository, error::AppError, model::inbound::Inbound,
    util::validate::validate_inbound_tag,
};

pub struct InboundService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> InboundService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn get_all(&self) -> Result<Vec<Inbound>, AppError> {
        Ok(InboundRepository::new(self.db).get_all().await?)
    }

    pub async fn tags(&self) -> Result<Vec<String>, AppError> {
        Ok(InboundRepository::new(self.db).tags().await?)
    }

    /// Creates or replaces the inbound with the same tag.
    ///
    /// # Returns
    /// - `Ok(Inbound)` - Stored record
    /// - `Err(AppError::BadRequest)` - Invalid tag or empty key
    pub async fn upsert(&self, inbound: Inbound) -> Result<Inbound, AppError> {
        let inbound_tag = validate_inbound_tag(&inbound.inbound_tag)?;

        if inbound.vless_key.trim().is_empty() {
            return Err(AppError::BadRequest("VLESS key must not be empty".to_string()));
        }

        let stored = InboundRepository::new(self.db)
            .upsert(Inbound {
                inbound_tag,
                ..inbound
            })
            .await?;

        tracing::info!("Inbound {} saved", stored.inbound_tag);

        Ok(stored)
    }
}
