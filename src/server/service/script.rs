//! Script discovery and bulk execution.

use std::path::Path;

use dioxus_logger::tracing;
use futures::future::join_all;

use crate::server::{
    error::AppError,
    model::server::OperationResult,
    service::remote::RemoteExecutor,
    util::validate::{validate_ips, validate_script_name, MAX_IPS_PER_RUN},
};

pub const REBOOT_SCRIPT: &str = "reboot.sh";

pub struct ScriptService<'a> {
    scripts_path: &'a Path,
    executor: &'a dyn RemoteExecutor,
}

impl<'a> ScriptService<'a> {
    pub fn new(scripts_path: &'a Path, executor: &'a dyn RemoteExecutor) -> Self {
        Self {
            scripts_path,
            executor,
        }
    }

    /// Lists `*.sh` files in the scripts directory, sorted by name.
    ///
    /// A missing directory yields an empty list.
    pub async fn available_scripts(&self) -> Result<Vec<String>, AppError> {
        let mut entries = match tokio::fs::read_dir(self.scripts_path).await {
            Ok(entries) => entries,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                tracing::warn!(
                    "Scripts directory {} does not exist",
                    self.scripts_path.display()
                );
                return Ok(Vec::new());
            }
            Err(e) => return Err(e.into()),
        };

        let mut scripts = Vec::new();
        while let Some(entry) = entries.next_entry().await? {
            if !entry.file_type().await?.is_file() {
                continue;
            }

            let name = entry.file_name().to_string_lossy().to_string();
            if name.ends_with(".sh") {
                scripts.push(name);
            }
        }

        scripts.sort();

        Ok(scripts)
    }

    /// Runs a script on every IP concurrently.
    ///
    /// # Returns
    /// - `Ok(Vec<OperationResult>)` - One result per IP in request order
    /// - `Err(AppError::BadRequest)` - Invalid IP list or script name
    pub async fn run_scripts(
        &self,
        ips: &[String],
        script_name: &str,
    ) -> Result<Vec<OperationResult>, AppError> {
        let ips = validate_ips(ips, MAX_IPS_PER_RUN)?;
        let script_name = validate_script_name(script_name)?;

        tracing::info!("Running {} on {} server(s)", script_name, ips.len());

        Ok(self.run_on_all(ips, &script_name).await)
    }

    /// Runs the reboot script on every IP concurrently.
    pub async fn reboot(&self, ips: &[String]) -> Result<Vec<OperationResult>, AppError> {
        let ips = validate_ips(ips, MAX_IPS_PER_RUN)?;

        tracing::info!("Rebooting {} server(s)", ips.len());

        Ok(self.run_on_all(ips, REBOOT_SCRIPT).await)
    }

    async fn run_on_all(&self, ips: Vec<String>, script_name: &str) -> Vec<OperationResult> {
        let runs = join_all(
            ips.iter()
                .map(|ip| self.executor.run_script(ip, script_name)),
        )
        .await;

        ips.into_iter()
            .zip(runs)
            .map(|(ip, run)| match run {
                Ok(_) => OperationResult::ok(ip, format!("{} executed successfully", script_name)),
                Err(e) => {
                    tracing::warn!("{} failed on {}: {}", script_name, ip, e);
                    OperationResult::failed(ip, e.to_string())
                }
            })
            .collect()
    }
}
