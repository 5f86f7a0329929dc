use crate::model::inbound::InboundDto;

/// Inbound configuration a server can be provisioned for.
#[derive(Debug, Clone, PartialEq)]
pub struct Inbound {
    pub inbound_tag: String,
    pub server_name: String,
    pub vless_key: String,
    pub domain: String,
}

impl Inbound {
    pub fn from_entity(entity: entity::inbound::Model) -> Self {
        Self {
            inbound_tag: entity.inbound_tag,
            server_name: entity.server_name,
            vless_key: entity.vless_key,
            domain: entity.domain,
        }
    }

    pub fn into_dto(self) -> InboundDto {
        InboundDto {
            inbound_tag: self.inbound_tag,
            server_name: self.server_name,
            vless_key: self.vless_key,
            domain: self.domain,
        }
    }
}

impl From<InboundDto> for Inbound {
    fn from(dto: InboundDto) -> Self {
        Self {
            inbound_tag: dto.inbound_tag,
            server_name: dto.server_name,
            vless_key: dto.vless_key,
            domain: dto.domain,
        }
    }
}
