//! Request validation helpers shared by the server and script services.
//!
//! Each helper returns `AppError::BadRequest` with a message suitable for showing in the
//! dashboard toast.

use std::{net::IpAddr, sync::LazyLock};

use regex::Regex;

use crate::server::error::AppError;

/// Maximum IPs accepted by add and setup requests.
pub const MAX_IPS_PER_ADD: usize = 50;
/// Maximum IPs accepted by run-script and reboot requests.
pub const MAX_IPS_PER_RUN: usize = 100;

const MAX_TAG_LEN: usize = 100;
const MAX_SCRIPT_NAME_LEN: usize = 100;

static INBOUND_TAG_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[\w\s\-.]+$").expect("inbound tag pattern is valid"));

static SCRIPT_NAME_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[\w-]+\.sh$").expect("script name pattern is valid"));

/// Parses and normalizes an IP address.
///
/// # Returns
/// - `Ok(String)` - Canonical textual form of the address
/// - `Err(AppError::BadRequest)` - Not an IPv4 or IPv6 address
pub fn validate_ip(ip: &str) -> Result<String, AppError> {
    let trimmed = ip.trim();

    trimmed
        .parse::<IpAddr>()
        .map(|addr| addr.to_string())
        .map_err(|_| AppError::BadRequest(format!("Invalid IP address: {}", trimmed)))
}

/// Validates every IP in a request and checks the list size.
///
/// # Arguments
/// - `ips` - Raw IPs from the request body
/// - `max` - Upper bound on the list length
///
/// # Returns
/// - `Ok(Vec<String>)` - Normalized IPs in request order
/// - `Err(AppError::BadRequest)` - Empty list, too many entries or an invalid address
pub fn validate_ips(ips: &[String], max: usize) -> Result<Vec<String>, AppError> {
    if ips.is_empty() {
        return Err(AppError::BadRequest("At least one IP is required".to_string()));
    }

    if ips.len() > max {
        return Err(AppError::BadRequest(format!(
            "Too many IPs: {} (maximum {})",
            ips.len(),
            max
        )));
    }

    ips.iter().map(|ip| validate_ip(ip)).collect()
}

/// Trims an inbound tag and checks its length and characters.
pub fn validate_inbound_tag(tag: &str) -> Result<String, AppError> {
    let trimmed = tag.trim();

    if trimmed.is_empty() || trimmed.chars().count() > MAX_TAG_LEN {
        return Err(AppError::BadRequest(format!(
            "Inbound tag must be between 1 and {} characters",
            MAX_TAG_LEN
        )));
    }

    if !INBOUND_TAG_RE.is_match(trimmed) {
        return Err(AppError::BadRequest(format!(
            "Inbound tag contains invalid characters: {}",
            trimmed
        )));
    }

    Ok(trimmed.to_string())
}

/// Checks a script file name, rejecting anything that could escape the scripts directory.
pub fn validate_script_name(name: &str) -> Result<String, AppError> {
    let trimmed = name.trim();

    if trimmed.len() > MAX_SCRIPT_NAME_LEN || !SCRIPT_NAME_RE.is_match(trimmed) {
        return Err(AppError::BadRequest(format!(
            "Invalid script name: {}",
            trimmed
        )));
    }

    Ok(trimmed.to_string())
}

/// Derives the setup script file name for an inbound tag.
///
/// Keeps ASCII alphanumerics and whitespace, lowercases, and joins words with `_`.
/// `"USA VLESS TCP"` becomes `usa_vless_tcp.sh`.
pub fn script_name_for_tag(tag: &str) -> String {
    let cleaned: String = tag
        .chars()
        .filter(|c| c.is_ascii_alphanumeric() || c.is_whitespace())
        .collect::<String>()
        .to_lowercase();

    let stem = cleaned.split_whitespace().collect::<Vec<_>>().join("_");

    format!("{}.sh", stem)
}
