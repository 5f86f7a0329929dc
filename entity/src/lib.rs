//! SeaORM entities for the node manager database.

pub mod prelude;

pub mod inbound;
pub mod login_attempt;
pub mod refresh_token;
pub mod server;
pub mod server_event;
pub mod user;
