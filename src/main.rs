mod client;
mod model;

#[cfg(feature = "server")]
mod server;

use client::App;

fn main() {
    #[cfg(not(feature = "server"))]
    dioxus::launch(App);

    #[cfg(feature = "server")]
    dioxus::serve(|| async move {
        use dioxus_logger::tracing;
        use std::sync::Arc;

        use crate::server::{
            config::Config,
            scheduler::status_monitor,
            service::{
                auth::token::TokenKeys,
                remote::{RemoteExecutor, SshExecutor},
                status::StatusTracker,
            },
            startup,
            state::AppState,
        };

        dotenvy::dotenv().ok();
        let config = Config::from_env()?;

        let db = startup::connect_to_database(&config).await?;
        let token_keys = TokenKeys::new(&config.jwt_secret, config.token_ttl_minutes);

        startup::ensure_admin(&db, &config, &token_keys).await?;

        let executor: Arc<dyn RemoteExecutor> = Arc::new(SshExecutor::new(
            config.scripts_path.clone(),
            config.ssh_user.clone(),
            config.ssh_key_path.clone(),
        ));
        let status = StatusTracker::new();

        tracing::info!("Starting server");

        // Start status monitor
        let scheduler_db = db.clone();
        let scheduler_status = status.clone();
        let scheduler_executor = executor.clone();
        tokio::spawn(async move {
            if let Err(e) =
                status_monitor::start_scheduler(scheduler_db, scheduler_status, scheduler_executor)
                    .await
            {
                tracing::error!("Status monitor error: {}", e);
            }
        });

        let mut router = dioxus::server::router(App);
        let server_routes = server::router::router().with_state(AppState::new(
            db,
            token_keys,
            executor,
            status,
            config.scripts_path,
        ));
        router = router.merge(server_routes);

        Ok(router)
    })
}
