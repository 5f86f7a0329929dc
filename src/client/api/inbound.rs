use crate::{
    client::{constant::LOADER_ATTEMPTS, model::error::ApiError},
    model::inbound::{InboundTagsDto, InboundsDto},
};

use super::helper::{get_with_retry, parse_response};

pub async fn get_inbounds() -> Result<InboundsDto, ApiError> {
    let response = get_with_retry("/api/vless_keys", LOADER_ATTEMPTS).await?;
    parse_response(response).await
}

pub async fn get_inbound_tags() -> Result<InboundTagsDto, ApiError> {
    let response = get_with_retry("/api/inbound_tags", LOADER_ATTEMPTS).await?;
    parse_response(response).await
}
