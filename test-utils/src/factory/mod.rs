//! Factory methods for creating test data.
//!
//! Each entity has its own factory module with a `Factory` struct for customization and a
//! `create_*` convenience function for quick default creation.
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! let server = factory::create_server(db).await?;
//! let event = factory::server_event::ServerEventFactory::new(db, &server.ip)
//!     .event_type("offline_start")
//!     .build()
//!     .await?;
//! ```
//!
//! # Available Factories
//!
//! - `server` - Managed servers
//! - `server_event` - Status events belonging to a server
//! - `inbound` - Inbound (VLESS key) records
//! - `user` - Dashboard users
//! - `helpers` - ID generation and multi-entity helpers

pub mod helpers;
pub mod inbound;
pub mod server;
pub mod server_event;
pub mod user;

pub use inbound::create_inbound;
pub use server::{create_server, create_server_with_ip};
pub use server_event::create_event;
pub use user::create_user;
