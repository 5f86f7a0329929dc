pub mod add_server;
pub mod login;
pub mod not_found;
pub mod server_list;
pub mod setup_server;
pub mod uptime;

pub use add_server::AddServer;
pub use login::Login;
pub use not_found::NotFound;
pub use server_list::ServerList;
pub use setup_server::SetupServer;
pub use uptime::Uptime;
