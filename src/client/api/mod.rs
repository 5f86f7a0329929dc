#[cfg(feature = "web")]
pub mod helper;

#[cfg(feature = "web")]
pub mod auth;

#[cfg(feature = "web")]
pub mod inbound;

#[cfg(feature = "web")]
pub mod script;

#[cfg(feature = "web")]
pub mod server;

#[cfg(feature = "web")]
pub mod uptime;
