//! Page state that does not touch the DOM, kept separate so it can be tested natively.

pub mod actions;
pub mod auth;
pub mod bulk;
pub mod format;
pub mod ip_tags;
pub mod server_table;
pub mod theme;
pub mod timeline;
pub mod toast;
pub mod uptime;
