use axum::{
    extract::State,
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::ErrorDto,
        inbound::{InboundDto, InboundTagsDto, InboundsDto},
    },
    server::{
        error::AppError,
        middleware::auth::{AuthGuard, Permission},
        model::inbound::Inbound,
        service::inbound::InboundService,
        state::AppState,
    },
};

pub static INBOUND_TAG: &str = "inbound";

#[utoipa::path(
    get,
    path = "/api/vless_keys",
    tag = INBOUND_TAG,
    responses(
        (status = 200, description = "All inbound records", body = InboundsDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_vless_keys(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.token_keys, &headers)
        .require(&[])
        .await?;

    let inbounds = InboundService::new(&state.db).get_all().await?;

    Ok((
        StatusCode::OK,
        Json(InboundsDto {
            data: inbounds.into_iter().map(|i| i.into_dto()).collect(),
        }),
    ))
}

#[utoipa::path(
    post,
    path = "/api/vless_keys",
    tag = INBOUND_TAG,
    request_body = InboundDto,
    responses(
        (status = 200, description = "Inbound stored", body = InboundDto),
        (status = 400, description = "Invalid inbound", body = ErrorDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Admin permission required", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn upsert_vless_key(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(payload): Json<InboundDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.token_keys, &headers)
        .require(&[Permission::Admin])
        .await?;

    let inbound = InboundService::new(&state.db)
        .upsert(Inbound::from(payload))
        .await?;

    Ok((StatusCode::OK, Json(inbound.into_dto())))
}

#[utoipa::path(
    get,
    path = "/api/inbound_tags",
    tag = INBOUND_TAG,
    responses(
        (status = 200, description = "Distinct inbound tags", body = InboundTagsDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_inbound_tags(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.token_keys, &headers)
        .require(&[])
        .await?;

    let tags = InboundService::new(&state.db).tags().await?;

    Ok((StatusCode::OK, Json(InboundTagsDto { tags })))
}
