use std::path::PathBuf;

use crate::server::error::{config::ConfigError, AppError};

const DEFAULT_ADMIN_USERNAME: &str = "admin";
const DEFAULT_SCRIPTS_PATH: &str = "./scripts";
const DEFAULT_SSH_USER: &str = "root";
const DEFAULT_TOKEN_TTL_MINUTES: i64 = 60;

pub struct Config {
    pub database_url: String,
    pub jwt_secret: String,
    pub token_ttl_minutes: i64,

    pub admin_username: String,
    pub admin_password: Option<String>,

    pub scripts_path: PathBuf,
    pub ssh_user: String,
    pub ssh_key_path: Option<PathBuf>,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        let token_ttl_minutes = match std::env::var("TOKEN_TTL_MINUTES") {
            Ok(value) => value.parse::<i64>().map_err(|_| ConfigError::InvalidEnvVar {
                name: "TOKEN_TTL_MINUTES".to_string(),
                value,
            })?,
            Err(_) => DEFAULT_TOKEN_TTL_MINUTES,
        };

        Ok(Self {
            database_url: std::env::var("DATABASE_URL")
                .map_err(|_| ConfigError::MissingEnvVar("DATABASE_URL".to_string()))?,
            jwt_secret: std::env::var("JWT_SECRET")
                .map_err(|_| ConfigError::MissingEnvVar("JWT_SECRET".to_string()))?,
            token_ttl_minutes,
            admin_username: std::env::var("ADMIN_USERNAME")
                .unwrap_or_else(|_| DEFAULT_ADMIN_USERNAME.to_string()),
            admin_password: optional_var("ADMIN_PASSWORD"),
            scripts_path: std::env::var("SCRIPTS_PATH")
                .unwrap_or_else(|_| DEFAULT_SCRIPTS_PATH.to_string())
                .into(),
            ssh_user: std::env::var("SSH_USER").unwrap_or_else(|_| DEFAULT_SSH_USER.to_string()),
            ssh_key_path: optional_var("SSH_KEY_PATH").map(PathBuf::from),
        })
    }
}

/// Unset and empty are the same for optional settings.
fn optional_var(name: &str) -> Option<String> {
    std::env::var(name).ok().filter(|value| !value.trim().is_empty())
}
