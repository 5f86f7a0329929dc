pub use sea_orm_migration::prelude::*;

mod m20260110_000001_create_user_table;
mod m20260110_000002_create_server_table;
mod m20260110_000003_create_server_event_table;
mod m20260112_000004_create_inbound_table;
mod m20260115_000005_add_user_lockout_columns;
mod m20260115_000006_create_refresh_token_table;
mod m20260115_000007_create_login_attempt_table;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20260110_000001_create_user_table::Migration),
            Box::new(m20260110_000002_create_server_table::Migration),
            Box::new(m20260110_000003_create_server_event_table::Migration),
            Box::new(m20260112_000004_create_inbound_table::Migration),
            Box::new(m20260115_000005_add_user_lockout_columns::Migration),
            Box::new(m20260115_000006_create_refresh_token_table::Migration),
            Box::new(m20260115_000007_create_login_attempt_table::Migration),
        ]
    }
}
