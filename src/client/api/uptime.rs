use crate::{
    client::{constant::LOADER_ATTEMPTS, model::error::ApiError},
    model::event::{Period, ServerEventsDto, UptimeSummaryListDto},
};

use super::helper::{get_with_retry, parse_response};

pub async fn get_uptime_summary(period: Period) -> Result<UptimeSummaryListDto, ApiError> {
    let url = format!("/api/uptime/summary?period={}", period.as_str());
    let response = get_with_retry(&url, LOADER_ATTEMPTS).await?;
    parse_response(response).await
}

pub async fn get_server_events(period: Period, limit: u64) -> Result<ServerEventsDto, ApiError> {
    let url = format!(
        "/api/server_events?period={}&limit={}",
        period.as_str(),
        limit
    );
    let response = get_with_retry(&url, LOADER_ATTEMPTS).await?;
    parse_response(response).await
}
