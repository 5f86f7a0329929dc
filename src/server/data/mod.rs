//! Database repository layer for all domain entities.
//!
//! Repository structs handle database operations (CRUD) for each domain in the application.
//! Repositories use SeaORM entity models internally and return domain models to keep the
//! data layer separated from business logic.

pub mod inbound;
pub mod login_attempt;
pub mod refresh_token;
pub mod server;
pub mod server_event;
pub mod user;

#[cfg(test)]
mod test;
