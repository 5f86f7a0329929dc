//! Service layer for business logic and orchestration.
//!
//! This module contains the service layer of the application, which sits between the
//! controller (API) layer and the data (repository) layer. Services are responsible for:
//!
//! - **Business Logic**: Validation and rules such as IP limits and script naming
//! - **Orchestration**: Coordinating repository calls with remote script execution
//! - **Domain Models**: Working with domain models rather than DTOs or entity models

pub mod auth;
pub mod inbound;
pub mod rate_limit;
pub mod remote;
pub mod script;
pub mod server;
pub mod status;
pub mod uptime;
