pub mod auth;
pub mod client;

#[cfg(test)]
mod test;
