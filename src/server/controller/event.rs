use axum::{
    extract::{Query, State},
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};
use chrono::Utc;

use crate::{
    model::{
        api::ErrorDto,
        event::{ServerEventsDto, UptimeSummaryListDto},
    },
    server::{
        controller::param::{parse_period, EventsParam, PeriodParam, DEFAULT_EVENTS_LIMIT},
        error::AppError,
        middleware::auth::AuthGuard,
        service::uptime::UptimeService,
        state::AppState,
        util::validate::validate_ip,
    },
};

pub static UPTIME_TAG: &str = "uptime";

#[utoipa::path(
    get,
    path = "/api/uptime/summary",
    tag = UPTIME_TAG,
    params(
        ("period" = Option<String>, Query, description = "24h (default), 7d or 30d")
    ),
    responses(
        (status = 200, description = "Uptime summary per server", body = UptimeSummaryListDto),
        (status = 400, description = "Invalid period", body = ErrorDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_uptime_summary(
    State(state): State<AppState>,
    headers: HeaderMap,
    Query(param): Query<PeriodParam>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.token_keys, &headers)
        .require(&[])
        .await?;

    let period = parse_period(param.period.as_deref())?;

    let summaries = UptimeService::new(&state.db, &state.status)
        .summary(period, Utc::now())
        .await?;

    Ok((
        StatusCode::OK,
        Json(UptimeSummaryListDto {
            data: summaries.into_iter().map(|s| s.into_dto()).collect(),
        }),
    ))
}

#[utoipa::path(
    get,
    path = "/api/server_events",
    tag = UPTIME_TAG,
    params(
        ("period" = Option<String>, Query, description = "24h (default), 7d or 30d"),
        ("server_ip" = Option<String>, Query, description = "Restrict to one server"),
        ("limit" = Option<u64>, Query, description = "1 to 1000 events (default: 100)")
    ),
    responses(
        (status = 200, description = "Events, newest first", body = ServerEventsDto),
        (status = 400, description = "Invalid period, IP or limit", body = ErrorDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_server_events(
    State(state): State<AppState>,
    headers: HeaderMap,
    Query(param): Query<EventsParam>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.token_keys, &headers)
        .require(&[])
        .await?;

    let period = parse_period(param.period.as_deref())?;
    let server_ip = param.server_ip.as_deref().map(validate_ip).transpose()?;

    let events = UptimeService::new(&state.db, &state.status)
        .events(
            period,
            server_ip.as_deref(),
            param.limit.unwrap_or(DEFAULT_EVENTS_LIMIT),
            Utc::now(),
        )
        .await?;

    Ok((
        StatusCode::OK,
        Json(ServerEventsDto {
            events: events.into_iter().map(|e| e.into_dto()).collect(),
        }),
    ))
}
