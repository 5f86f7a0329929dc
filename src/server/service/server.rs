//! Server registration, provisioning and editing.

use dioxus_logger::tracing;
use futures::future::join_all;
use sea_orm::DatabaseConnection;

use crate::server::{
    data::server::ServerRepository,
    error::AppError,
    model::server::{OperationResult, Server, UpdateServerParam, UpsertServerParam},
    service::{remote::RemoteExecutor, status::StatusTracker},
    util::validate::{
        script_name_for_tag, validate_inbound_tag, validate_ip, validate_ips, MAX_IPS_PER_ADD,
    },
};

pub struct ServerService<'a> {
    db: &'a DatabaseConnection,
    tracker: &'a StatusTracker,
}

impl<'a> ServerService<'a> {
    /// Creates a new ServerService instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    /// - `tracker` - Shared status map, kept in step with renames and deletes
    pub fn new(db: &'a DatabaseConnection, tracker: &'a StatusTracker) -> Self {
        Self { db, tracker }
    }

    pub async fn get_all(&self) -> Result<Vec<Server>, AppError> {
        Ok(ServerRepository::new(self.db).get_all().await?)
    }

    /// Registers servers without touching them.
    ///
    /// # Arguments
    /// - `ips` - 1 to 50 IP addresses
    /// - `inbound_tag` - Inbound the servers are assigned to
    ///
    /// # Returns
    /// - `Ok(Vec<OperationResult>)` - One result per IP in request order
    /// - `Err(AppError::BadRequest)` - Invalid IP list or tag
    pub async fn add_manual(
        &self,
        ips: &[String],
        inbound_tag: &str,
    ) -> Result<Vec<OperationResult>, AppError> {
        let ips = validate_ips(ips, MAX_IPS_PER_ADD)?;
        let inbound_tag = validate_inbound_tag(inbound_tag)?;

        let mut results = Vec::with_capacity(ips.len());
        for ip in ips {
            results.push(self.save(ip, inbound_tag.clone()).await);
        }

        Ok(results)
    }

    /// Runs the inbound's setup script on each server and registers the ones that succeed.
    ///
    /// Script runs happen concurrently; saving happens afterwards in request order.
    ///
    /// # Returns
    /// - `Ok(Vec<OperationResult>)` - One result per IP in request order
    /// - `Err(AppError::BadRequest)` - Invalid IP list or tag
    pub async fn setup(
        &self,
        ips: &[String],
        inbound_tag: &str,
        executor: &dyn RemoteExecutor,
    ) -> Result<Vec<OperationResult>, AppError> {
        let ips = validate_ips(ips, MAX_IPS_PER_ADD)?;
        let inbound_tag = validate_inbound_tag(inbound_tag)?;
        let script_name = script_name_for_tag(&inbound_tag);

        tracing::info!(
            "Setting up {} server(s) for {} with {}",
            ips.len(),
            inbound_tag,
            script_name
        );

        let runs = join_all(ips.iter().map(|ip| executor.run_script(ip, &script_name))).await;

        let mut results = Vec::with_capacity(ips.len());
        for (ip, run) in ips.into_iter().zip(runs) {
            match run {
                Ok(_) => results.push(self.save(ip, inbound_tag.clone()).await),
                Err(e) => {
                    tracing::warn!("Setup of {} failed: {}", ip, e);
                    results.push(OperationResult::failed(
                        ip,
                        format!("Failed to deploy script: {}", e),
                    ));
                }
            }
        }

        Ok(results)
    }

    /// Renames a server and/or changes its inbound tag.
    ///
    /// # Returns
    /// - `Ok(Server)` - The updated server
    /// - `Err(AppError::BadRequest)` - Invalid input, or the new IP belongs to another server
    /// - `Err(AppError::NotFound)` - No server with `old_ip`
    pub async fn edit(
        &self,
        old_ip: &str,
        new_ip: &str,
        inbound_tag: &str,
    ) -> Result<Server, AppError> {
        let old_ip = validate_ip(old_ip)?;
        let new_ip = validate_ip(new_ip)?;
        let inbound_tag = validate_inbound_tag(inbound_tag)?;

        let server_repo = ServerRepository::new(self.db);

        if old_ip != new_ip && server_repo.find_by_ip(&new_ip).await?.is_some() {
            return Err(AppError::BadRequest(format!(
                "Server {} already exists",
                new_ip
            )));
        }

        let Some(server) = server_repo
            .update(UpdateServerParam {
                old_ip: old_ip.clone(),
                new_ip: new_ip.clone(),
                inbound_tag,
            })
            .await?
        else {
            return Err(AppError::NotFound(format!("Server {} not found", old_ip)));
        };

        if old_ip != new_ip {
            self.tracker.rename(&old_ip, &new_ip).await;
        }

        tracing::info!("Server {} updated", server.ip);

        Ok(server)
    }

    /// Deletes a server together with its event history.
    ///
    /// # Returns
    /// - `Ok(())` - Server deleted
    /// - `Err(AppError::NotFound)` - No server with this IP
    pub async fn delete(&self, ip: &str) -> Result<(), AppError> {
        let ip = validate_ip(ip)?;

        if !ServerRepository::new(self.db).delete(&ip).await? {
            return Err(AppError::NotFound(format!("Server {} not found", ip)));
        }

        self.tracker.forget(&ip).await;

        tracing::info!("Server {} deleted", ip);

        Ok(())
    }

    async fn save(&self, ip: String, inbound_tag: String) -> OperationResult {
        let result = ServerRepository::new(self.db)
            .upsert(UpsertServerParam {
                ip: ip.clone(),
                inbound_tag,
            })
            .await;

        match result {
            Ok(_) => OperationResult::ok(ip, "Server added successfully"),
            Err(e) => {
                tracing::error!("Failed to save server {}: {}", ip, e);
                OperationResult::failed(ip, "Failed to save server to database")
            }
        }
    }
}
