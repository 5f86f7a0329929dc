//! In-memory reachability tracking and the probe cycle that feeds it.

use std::{
    collections::{BTreeMap, HashMap},
    sync::Arc,
};

use chrono::{DateTime, Utc};
use dioxus_logger::tracing;
use futures::future::join_all;
use sea_orm::DatabaseConnection;
use tokio::sync::RwLock;

use crate::{
    model::{event::EventType, server::ServerStatus},
    server::{
        data::{server::ServerRepository, server_event::ServerEventRepository},
        error::AppError,
        model::event::CreateServerEventParam,
        service::remote::RemoteExecutor,
    },
};

/// Last observed state of one server.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ObservedState {
    pub status: ServerStatus,
    pub offline_since: Option<DateTime<Utc>>,
}

/// Event produced by a status change.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transition {
    pub event_type: EventType,
    pub duration_seconds: Option<i64>,
}

/// Computes the next state and the event to record for a probe result.
///
/// A server seen for the first time logs `online` or `offline_start`. Going down logs
/// `offline_start`; coming back logs `offline_end` with the outage length. No change logs
/// nothing.
pub fn transition(
    previous: Option<ObservedState>,
    reachable: bool,
    now: DateTime<Utc>,
) -> (ObservedState, Option<Transition>) {
    let previous = previous.filter(|p| p.status != ServerStatus::Unknown);

    match (previous, reachable) {
        (None, true) => (
            ObservedState {
                status: ServerStatus::Online,
                offline_since: None,
            },
            Some(Transition {
                event_type: EventType::Online,
                duration_seconds: None,
            }),
        ),
        (None, false) | (Some(ObservedState { status: ServerStatus::Online, .. }), false) => (
            ObservedState {
                status: ServerStatus::Offline,
                offline_since: Some(now),
            },
            Some(Transition {
                event_type: EventType::OfflineStart,
                duration_seconds: None,
            }),
        ),
        (Some(ObservedState { status: ServerStatus::Offline, offline_since }), true) => (
            ObservedState {
                status: ServerStatus::Online,
                offline_since: None,
            },
            Some(Transition {
                event_type: EventType::OfflineEnd,
                duration_seconds: offline_since.map(|since| (now - since).num_seconds().max(0)),
            }),
        ),
        (Some(state), _) => (state, None),
    }
}

/// Shared map of server IP to last observed state.
///
/// Clones share the same map.
#[derive(Clone, Default)]
pub struct StatusTracker {
    inner: Arc<RwLock<HashMap<String, ObservedState>>>,
}

impl StatusTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Applies a probe result and returns the event to record, if any.
    pub async fn observe(&self, ip: &str, reachable: bool, now: DateTime<Utc>) -> Option<Transition> {
        let mut states = self.inner.write().await;

        let (next, event) = transition(states.get(ip).copied(), reachable, now);
        states.insert(ip.to_string(), next);

        event
    }

    pub async fn seed(&self, ip: &str, state: ObservedState) {
        self.inner.write().await.insert(ip.to_string(), state);
    }

    /// Current status per IP; servers never probed are absent.
    pub async fn statuses(&self) -> BTreeMap<String, ServerStatus> {
        self.inner
            .read()
            .await
            .iter()
            .map(|(ip, state)| (ip.clone(), state.status))
            .collect()
    }

    pub async fn status_of(&self, ip: &str) -> ServerStatus {
        self.inner
            .read()
            .await
            .get(ip)
            .map(|state| state.status)
            .unwrap_or_default()
    }

    pub async fn forget(&self, ip: &str) {
        self.inner.write().await.remove(ip);
    }

    pub async fn rename(&self, old_ip: &str, new_ip: &str) {
        let mut states = self.inner.write().await;

        if let Some(state) = states.remove(old_ip) {
            states.insert(new_ip.to_string(), state);
        }
    }
}

/// Probes servers and records status changes as events.
pub struct StatusService<'a> {
    db: &'a DatabaseConnection,
    tracker: &'a StatusTracker,
}

impl<'a> StatusService<'a> {
    pub fn new(db: &'a DatabaseConnection, tracker: &'a StatusTracker) -> Self {
        Self { db, tracker }
    }

    /// Restores tracker state from each server's most recent event.
    ///
    /// Prevents a restart from logging a duplicate `online` or `offline_start`.
    pub async fn seed_from_history(&self) -> Result<(), AppError> {
        let servers = ServerRepository::new(self.db).get_all().await?;
        let event_repo = ServerEventRepository::new(self.db);

        for server in servers {
            let Some(event) = event_repo.latest_for_server(&server.ip).await? else {
                continue;
            };

            let status = event.event_type.resulting_status();
            let offline_since = (status == ServerStatus::Offline).then_some(event.event_time);

            self.tracker
                .seed(
                    &server.ip,
                    ObservedState {
                        status,
                        offline_since,
                    },
                )
                .await;
        }

        Ok(())
    }

    /// Probes every registered server concurrently and records resulting events.
    ///
    /// # Returns
    /// - `Ok(usize)` - Number of events recorded
    /// - `Err(AppError::DbErr)` - Failed to list servers
    pub async fn check_all(&self, executor: &dyn RemoteExecutor) -> Result<usize, AppError> {
        let servers = ServerRepository::new(self.db).get_all().await?;

        let probes = join_all(servers.iter().map(|server| executor.probe(&server.ip))).await;

        let now = Utc::now();
        let event_repo = ServerEventRepository::new(self.db);
        let mut recorded = 0;

        for (server, reachable) in servers.iter().zip(probes) {
            let Some(change) = self.tracker.observe(&server.ip, reachable, now).await else {
                continue;
            };

            let result = event_repo
                .create(CreateServerEventParam {
                    server_ip: server.ip.clone(),
                    event_type: change.event_type,
                    event_time: now,
                    duration_seconds: change.duration_seconds,
                })
                .await;

            match result {
                Ok(_) => recorded += 1,
                Err(e) => tracing::error!("Failed to record event for {}: {}", server.ip, e),
            }
        }

        Ok(recorded)
    }
}
