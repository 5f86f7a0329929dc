use dioxus_logger::tracing;
use sea_orm::DatabaseConnection;

use crate::server::{
    config::Config,
    error::AppError,
    service::auth::{token::TokenKeys, AuthService},
};

/// Connects to the Sqlite database and runs pending migrations.
///
/// Establishes a connection pool to the Sqlite database using the connection string from
/// configuration, then automatically runs all pending SeaORM migrations to ensure the database
/// schema is up-to-date. This function must complete successfully before the application can
/// access the database.
///
/// # Arguments
/// - `config` - Application configuration containing the database URL
///
/// # Returns
/// - `Ok(DatabaseConnection)` - Connected database with migrations applied
/// - `Err(Error)` - Failed to connect to database or run migrations
pub async fn connect_to_database(config: &Config) -> Result<DatabaseConnection, AppError> {
    use migration::{Migrator, MigratorTrait};
    use sea_orm::{ConnectOptions, Database};

    let mut opt = ConnectOptions::new(&config.database_url);
    opt.sqlx_logging(false);

    let db = Database::connect(opt).await?;

    Migrator::up(&db, None).await?;

    Ok(db)
}

/// Creates the first admin account when the database has no users.
///
/// A generated password is logged once at warn level so it stands out in startup output.
///
/// # Arguments
/// - `db` - Database connection
/// - `config` - Configuration holding the admin username and optional password
/// - `keys` - Token keys required by the auth service
pub async fn ensure_admin(
    db: &DatabaseConnection,
    config: &Config,
    keys: &TokenKeys,
) -> Result<(), AppError> {
    let generated = AuthService::new(db, keys)
        .bootstrap_admin(&config.admin_username, config.admin_password.clone())
        .await?;

    if let Some(password) = generated {
        tracing::warn!(
            "Created admin user '{}' with generated password: {}",
            config.admin_username,
            password
        );
        tracing::warn!("Set ADMIN_PASSWORD or change this password after first login");
    }

    Ok(())
}
