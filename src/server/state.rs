//! Application state shared across all request handlers.
//!
//! The state is initialized once during startup and then cloned for each request through
//! Axum's state extraction. It includes:
//! - Database connection pool for data persistence
//! - JWT keys for issuing and verifying bearer tokens
//! - Remote executor for running scripts on managed servers
//! - Status tracker fed by the status monitor
//! - Login rate limiter

use sea_orm::DatabaseConnection;
use std::{path::PathBuf, sync::Arc};

use crate::server::service::{
    auth::token::TokenKeys, rate_limit::LoginRateLimiter, remote::RemoteExecutor,
    status::StatusTracker,
};

/// Application state containing shared resources and dependencies.
///
/// All fields are cheap to clone: the connection is a pool handle and the remaining
/// shared resources are reference-counted.
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool for accessing persistent storage.
    pub db: DatabaseConnection,

    /// Signing keys and access token lifetime.
    pub token_keys: TokenKeys,

    /// Executes scripts and reachability probes against managed servers.
    pub executor: Arc<dyn RemoteExecutor>,

    /// Last observed status per server IP, shared with the status monitor.
    pub status: StatusTracker,

    /// Attempts per client address and username on the login endpoint.
    pub login_limiter: LoginRateLimiter,

    /// Directory holding the `*.sh` scripts offered in the dashboard.
    pub scripts_path: PathBuf,
}

impl AppState {
    /// Creates a new application state with the provided dependencies.
    ///
    /// # Arguments
    /// - `db` - Database connection pool
    /// - `token_keys` - JWT keys
    /// - `executor` - Remote executor shared with the status monitor
    /// - `status` - Status tracker shared with the status monitor
    /// - `scripts_path` - Scripts directory
    ///
    /// # Returns
    /// - `AppState` - Initialized application state ready for use
    pub fn new(
        db: DatabaseConnection,
        token_keys: TokenKeys,
        executor: Arc<dyn RemoteExecutor>,
        status: StatusTracker,
        scripts_path: PathBuf,
    ) -> Self {
        Self {
            db,
            token_keys,
            executor,
            status,
            login_limiter: LoginRateLimiter::default(),
            scripts_path,
        }
    }
}
