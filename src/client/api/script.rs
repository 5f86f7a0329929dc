use crate::{
    client::{constant::LOADER_ATTEMPTS, model::error::ApiError},
    model::server::{BulkResultDto, RebootServersDto, RunScriptsDto, ScriptsDto},
};

use super::helper::{fetch_with_auth, get_with_retry, parse_response, post, serialize_json};

pub async fn get_scripts() -> Result<ScriptsDto, ApiError> {
    let response = get_with_retry("/api/scripts", LOADER_ATTEMPTS).await?;
    parse_response(response).await
}

pub async fn run_scripts(ips: Vec<String>, script_name: String) -> Result<BulkResultDto, ApiError> {
    let body = serialize_json(&RunScriptsDto { ips, script_name })?;
    let response = fetch_with_auth(post("/api/run_scripts").body(body)).await?;
    parse_response(response).await
}

pub async fn reboot_servers(ips: Vec<String>) -> Result<BulkResultDto, ApiError> {
    let body = serialize_json(&RebootServersDto { ips })?;
    let response = fetch_with_auth(post("/api/reboot_servers").body(body)).await?;
    parse_response(response).await
}
