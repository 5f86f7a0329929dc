//! Domain & parameter models for managed servers and per-IP operation results.

use chrono::{DateTime, Utc};

use crate::model::server::{OperationResultDto, ServerDto};

/// A managed server registered in the dashboard.
#[derive(Debug, Clone, PartialEq)]
pub struct Server {
    pub ip: String,
    pub inbound_tag: String,
    pub install_date: Option<DateTime<Utc>>,
}

impl Server {
    pub fn from_entity(entity: entity::server::Model) -> Self {
        Self {
            ip: entity.ip,
            inbound_tag: entity.inbound_tag,
            install_date: entity.install_date,
        }
    }

    pub fn into_dto(self) -> ServerDto {
        ServerDto {
            ip: self.ip,
            inbound_tag: self.inbound_tag,
            install_date: self.install_date,
        }
    }
}

/// Parameters for inserting a server or refreshing an existing one.
///
/// On conflict the inbound tag is replaced and the install date reset to now.
#[derive(Debug, Clone)]
pub struct UpsertServerParam {
    pub ip: String,
    pub inbound_tag: String,
}

/// Parameters for renaming a server and changing its inbound tag.
#[derive(Debug, Clone)]
pub struct UpdateServerParam {
    pub old_ip: String,
    pub new_ip: String,
    pub inbound_tag: String,
}

/// Result of an operation against a single IP within a bulk request.
#[derive(Debug, Clone, PartialEq)]
pub struct OperationResult {
    pub ip: String,
    pub success: bool,
    pub message: String,
}

impl OperationResult {
    pub fn ok(ip: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            ip: ip.into(),
            success: true,
            message: message.into(),
        }
    }

    pub fn failed(ip: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            ip: ip.into(),
            success: false,
            message: message.into(),
        }
    }

    pub fn into_dto(self) -> OperationResultDto {
        OperationResultDto {
            ip: self.ip,
            success: self.success,
            message: self.message,
        }
    }
}
