use axum::{
    extract::{Query, State},
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::ErrorDto,
        server::{
            AddServersDto, BulkResultDto, EditServerDto, OperationDto, ServerStatusesDto,
            ServersDto,
        },
    },
    server::{
        controller::param::IpParam,
        error::AppError,
        middleware::auth::AuthGuard,
        model::server::OperationResult,
        service::server::ServerService,
        state::AppState,
    },
};

pub static SERVER_TAG: &str = "server";

fn bulk_result(results: Vec<OperationResult>) -> BulkResultDto {
    BulkResultDto {
        results: results.into_iter().map(|r| r.into_dto()).collect(),
    }
}

#[utoipa::path(
    get,
    path = "/api/servers",
    tag = SERVER_TAG,
    responses(
        (status = 200, description = "All registered servers", body = ServersDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_servers(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.token_keys, &headers)
        .require(&[])
        .await?;

    let servers = ServerService::new(&state.db, &state.status)
        .get_all()
        .await?;

    Ok((
        StatusCode::OK,
        Json(ServersDto {
            servers: servers.into_iter().map(|s| s.into_dto()).collect(),
        }),
    ))
}

#[utoipa::path(
    get,
    path = "/api/server_status",
    tag = SERVER_TAG,
    responses(
        (status = 200, description = "Last observed status per IP; unprobed servers are absent", body = ServerStatusesDto),
        (status = 401, description = "Not authenticated", body = ErrorDto)
    ),
)]
pub async fn get_server_status(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.token_keys, &headers)
        .require(&[])
        .await?;

    Ok((
        StatusCode::OK,
        Json(ServerStatusesDto {
            statuses: state.status.statuses().await,
        }),
    ))
}

#[utoipa::path(
    post,
    path = "/api/add_server_manual",
    tag = SERVER_TAG,
    request_body = AddServersDto,
    responses(
        (status = 200, description = "Per-IP results", body = BulkResultDto),
        (status = 400, description = "Invalid IPs or inbound tag", body = ErrorDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn add_server_manual(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(payload): Json<AddServersDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.token_keys, &headers)
        .require(&[])
        .await?;

    let results = ServerService::new(&state.db, &state.status)
        .add_manual(&payload.ips, &payload.inbound_tag)
        .await?;

    Ok((StatusCode::OK, Json(bulk_result(results))))
}

#[utoipa::path(
    post,
    path = "/api/add_server",
    tag = SERVER_TAG,
    request_body = AddServersDto,
    responses(
        (status = 200, description = "Per-IP setup results", body = BulkResultDto),
        (status = 400, description = "Invalid IPs or inbound tag", body = ErrorDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn add_server(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(payload): Json<AddServersDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.token_keys, &headers)
        .require(&[])
        .await?;

    let results = ServerService::new(&state.db, &state.status)
        .setup(&payload.ips, &payload.inbound_tag, state.executor.as_ref())
        .await?;

    Ok((StatusCode::OK, Json(bulk_result(results))))
}

#[utoipa::path(
    post,
    path = "/api/edit_server",
    tag = SERVER_TAG,
    request_body = EditServerDto,
    responses(
        (status = 200, description = "Server updated", body = OperationDto),
        (status = 400, description = "Invalid input or IP already in use", body = ErrorDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 404, description = "Server not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn edit_server(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(payload): Json<EditServerDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.token_keys, &headers)
        .require(&[])
        .await?;

    let server = ServerService::new(&state.db, &state.status)
        .edit(&payload.old_ip, &payload.new_ip, &payload.new_inbound_tag)
        .await?;

    Ok((
        StatusCode::OK,
        Json(OperationDto {
            success: true,
            message: format!("Server {} updated successfully", server.ip),
        }),
    ))
}

#[utoipa::path(
    delete,
    path = "/api/delete_server",
    tag = SERVER_TAG,
    params(
        ("ip" = String, Query, description = "IP of the server to delete")
    ),
    responses(
        (status = 200, description = "Server deleted", body = OperationDto),
        (status = 400, description = "Invalid IP", body = ErrorDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 404, description = "Server not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_server(
    State(state): State<AppState>,
    headers: HeaderMap,
    Query(param): Query<IpParam>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.token_keys, &headers)
        .require(&[])
        .await?;

    ServerService::new(&state.db, &state.status)
        .delete(&param.ip)
        .await?;

    Ok((
        StatusCode::OK,
        Json(OperationDto {
            success: true,
            message: "Server deleted successfully".to_string(),
        }),
    ))
}
