//! Data transfer objects shared by the dashboard and the API.

pub mod api;
pub mod auth;
pub mod event;
pub mod inbound;
pub mod server;
