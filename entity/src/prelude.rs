pub use super::inbound::Entity as Inbound;
pub use super::login_attempt::Entity as LoginAttempt;
pub use super::refresh_token::Entity as RefreshToken;
pub use super::server::Entity as Server;
pub use super::server_event::Entity as ServerEvent;
pub use super::user::Entity as User;
