use crate::{
    client::{constant::LOADER_ATTEMPTS, model::error::ApiError},
    model::server::{
        AddServersDto, BulkResultDto, EditServerDto, OperationDto, ServerStatusesDto, ServersDto,
    },
};

use super::helper::{
    delete, fetch_with_auth, get_with_retry, parse_response, post, serialize_json,
};

pub async fn get_servers() -> Result<ServersDto, ApiError> {
    let response = get_with_retry("/api/servers", LOADER_ATTEMPTS).await?;
    parse_response(response).await
}

pub async fn get_server_statuses() -> Result<ServerStatusesDto, ApiError> {
    let response = get_with_retry("/api/server_status", LOADER_ATTEMPTS).await?;
    parse_response(response).await
}

/// Registers servers without touching them.
pub async fn add_servers_manual(payload: AddServersDto) -> Result<BulkResultDto, ApiError> {
    let request = post("/api/add_server_manual").body(serialize_json(&payload)?);
    let response = fetch_with_auth(request).await?;
    parse_response(response).await
}

/// Deploys the inbound's script to each server, registering the ones that succeed.
pub async fn setup_servers(payload: AddServersDto) -> Result<BulkResultDto, ApiError> {
    let request = post("/api/add_server").body(serialize_json(&payload)?);
    let response = fetch_with_auth(request).await?;
    parse_response(response).await
}

pub async fn edit_server(payload: EditServerDto) -> Result<OperationDto, ApiError> {
    let request = post("/api/edit_server").body(serialize_json(&payload)?);
    let response = fetch_with_auth(request).await?;
    parse_response(response).await
}

pub async fn delete_server(ip: String) -> Result<OperationDto, ApiError> {
    let url = format!("/api/delete_server?ip={}", urlencoding::encode(&ip));
    let response = fetch_with_auth(delete(&url)).await?;
    parse_response(response).await
}
