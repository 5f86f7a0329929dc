use axum::{
    extract::State,
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::ErrorDto,
        server::{BulkResultDto, RebootServersDto, RunScriptsDto, ScriptsDto},
    },
    server::{
        error::AppError, middleware::auth::AuthGuard, service::script::ScriptService,
        state::AppState,
    },
};

pub static SCRIPT_TAG: &str = "script";

#[utoipa::path(
    get,
    path = "/api/scripts",
    tag = SCRIPT_TAG,
    responses(
        (status = 200, description = "Available script names", body = ScriptsDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_scripts(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.token_keys, &headers)
        .require(&[])
        .await?;

    let scripts = ScriptService::new(&state.scripts_path, state.executor.as_ref())
        .available_scripts()
        .await?;

    Ok((StatusCode::OK, Json(ScriptsDto { scripts })))
}

#[utoipa::path(
    post,
    path = "/api/run_scripts",
    tag = SCRIPT_TAG,
    request_body = RunScriptsDto,
    responses(
        (status = 200, description = "Per-IP results", body = BulkResultDto),
        (status = 400, description = "Invalid IPs or script name", body = ErrorDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn run_scripts(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(payload): Json<RunScriptsDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.token_keys, &headers)
        .require(&[])
        .await?;

    let results = ScriptService::new(&state.scripts_path, state.executor.as_ref())
        .run_scripts(&payload.ips, &payload.script_name)
        .await?;

    Ok((
        StatusCode::OK,
        Json(BulkResultDto {
            results: results.into_iter().map(|r| r.into_dto()).collect(),
        }),
    ))
}

#[utoipa::path(
    post,
    path = "/api/reboot_servers",
    tag = SCRIPT_TAG,
    request_body = RebootServersDto,
    responses(
        (status = 200, description = "Per-IP results", body = BulkResultDto),
        (status = 400, description = "Invalid IPs", body = ErrorDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn reboot_servers(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(payload): Json<RebootServersDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.token_keys, &headers)
        .require(&[])
        .await?;

    let results = ScriptService::new(&state.scripts_path, state.executor.as_ref())
        .reboot(&payload.ips)
        .await?;

    Ok((
        StatusCode::OK,
        Json(BulkResultDto {
            results: results.into_iter().map(|r| r.into_dto()).collect(),
        }),
    ))
}
