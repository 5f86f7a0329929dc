use thiserror::Error;

/// Errors that can occur while setting up a test environment.
#[derive(Error, Debug)]
pub enum TestError {
    /// Failed to connect to the in-memory database or to create the requested tables.
    #[error(transparent)]
    Database(#[from] sea_orm::DbErr),
}
