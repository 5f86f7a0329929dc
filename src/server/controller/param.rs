use serde::Deserialize;

use crate::{model::event::Period, server::error::AppError};

pub const DEFAULT_EVENTS_LIMIT: u64 = 100;

#[derive(Deserialize)]
pub struct IpParam {
    pub ip: String,
}

#[derive(Deserialize, Default)]
pub struct PeriodParam {
    pub period: Option<String>,
}

#[derive(Deserialize, Default)]
pub struct EventsParam {
    pub period: Option<String>,
    pub server_ip: Option<String>,
    pub limit: Option<u64>,
}

/// Parses an optional period query value, defaulting to 24 hours.
///
/// # Returns
/// - `Ok(Period)` - Parsed or default period
/// - `Err(AppError::BadRequest)` - Value is not one of `24h`, `7d`, `30d`
pub fn parse_period(value: Option<&str>) -> Result<Period, AppError> {
    match value {
        None => Ok(Period::default()),
        Some(value) => Period::parse(value).ok_or_else(|| {
            AppError::BadRequest(format!(
                "Invalid period '{}', expected one of 24h, 7d, 30d",
                value
            ))
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_known_periods_and_defaults() {
        assert_eq!(parse_period(None).unwrap(), Period::Day);
        assert_eq!(parse_period(Some("7d")).unwrap(), Period::Week);
        assert_eq!(parse_period(Some("30d")).unwrap(), Period::Month);
        assert!(matches!(
            parse_period(Some("1y")),
            Err(AppError::BadRequest(_))
        ));
    }
}
