use dioxus_logger::tracing;
use sea_orm::DatabaseConnection;
use std::sync::Arc;
use tokio_cron_scheduler::{Job, JobScheduler};

use crate::server::{
    error::AppError,
    service::{
        remote::RemoteExecutor,
        status::{StatusService, StatusTracker},
    },
};

/// Starts the status monitor
///
/// Restores tracker state from event history, then probes every server once a minute
/// and records status changes as events.
///
/// # Arguments
/// - `db`: Database connection
/// - `tracker`: Status tracker shared with the API
/// - `executor`: Executor used for reachability probes
pub async fn start_scheduler(
    db: DatabaseConnection,
    tracker: StatusTracker,
    executor: Arc<dyn RemoteExecutor>,
) -> Result<(), AppError> {
    StatusService::new(&db, &tracker).seed_from_history().await?;

    let scheduler = JobScheduler::new().await?;

    let job = Job::new_async("0 * * * * *", move |_uuid, _lock| {
        let db = db.clone();
        let tracker = tracker.clone();
        let executor = executor.clone();

        Box::pin(async move {
            match StatusService::new(&db, &tracker)
                .check_all(executor.as_ref())
                .await
            {
                Ok(0) => {}
                Ok(recorded) => tracing::info!("Recorded {} status change(s)", recorded),
                Err(e) => tracing::error!("Error checking server status: {}", e),
            }
        })
    })?;

    scheduler.add(job).await?;
    scheduler.start().await?;

    tracing::info!("Status monitor started");

    Ok(())
}
