//! HTTP request handlers.
//!
//! Each controller authenticates the request with `AuthGuard`, delegates to a service and
//! converts domain models into DTOs. Handlers are annotated with `utoipa::path` and
//! collected into the OpenAPI document in `router`.

pub mod auth;
pub mod event;
pub mod inbound;
pub mod param;
pub mod script;
pub mod server;
