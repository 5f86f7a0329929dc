mod inbound;
mod login_attempt;
mod refresh_token;
mod server;
mod server_event;
mod user;
