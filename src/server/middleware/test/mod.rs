mod auth;
mod client;
