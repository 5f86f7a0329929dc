pub mod api;
pub mod app;
#[cfg(feature = "web")]
pub mod browser;
pub mod component;
pub mod constant;
pub mod model;
pub mod route;
pub mod router;
#[cfg(feature = "web")]
pub mod session;
pub mod store;

pub use app::App;
