//! Remote script execution over SSH.
//!
//! `SshExecutor` shells out to the system `ssh`/`scp` binaries with batch mode enabled,
//! so key-based authentication must already be configured for `SSH_USER`.

use std::{
    net::{IpAddr, SocketAddr},
    path::PathBuf,
    process::Stdio,
    time::Duration,
};

use async_trait::async_trait;
use dioxus_logger::tracing;
use tokio::{net::TcpStream, process::Command, time::timeout};

use crate::server::error::remote::RemoteError;

const SSH_PORT: u16 = 22;
const PROBE_TIMEOUT: Duration = Duration::from_secs(5);
const COPY_TIMEOUT_SECS: u64 = 60;
const RUN_TIMEOUT_SECS: u64 = 600;
const REMOTE_DIR: &str = "/tmp";

/// Runs scripts on, and checks reachability of, managed servers.
#[async_trait]
pub trait RemoteExecutor: Send + Sync {
    /// Returns whether the server accepts connections on its SSH port.
    async fn probe(&self, ip: &str) -> bool;

    /// Copies `script_name` from the scripts directory to the server and runs it.
    ///
    /// # Returns
    /// - `Ok(String)` - Script stdout
    /// - `Err(RemoteError)` - Script missing, host unreachable, timeout or non-zero exit
    async fn run_script(&self, ip: &str, script_name: &str) -> Result<String, RemoteError>;
}

pub struct SshExecutor {
    scripts_path: PathBuf,
    user: String,
    key_path: Option<PathBuf>,
}

impl SshExecutor {
    pub fn new(scripts_path: PathBuf, user: String, key_path: Option<PathBuf>) -> Self {
        Self {
            scripts_path,
            user,
            key_path,
        }
    }

    fn common_args(&self) -> Vec<String> {
        let mut args = vec![
            "-o".to_string(),
            "BatchMode=yes".to_string(),
            "-o".to_string(),
            "StrictHostKeyChecking=no".to_string(),
            "-o".to_string(),
            format!("ConnectTimeout={}", PROBE_TIMEOUT.as_secs()),
        ];

        if let Some(key) = &self.key_path {
            args.push("-i".to_string());
            args.push(key.display().to_string());
        }

        args
    }

    async fn execute(&self, mut command: Command, timeout_secs: u64) -> Result<String, RemoteError> {
        command
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .kill_on_drop(true);

        let output = timeout(Duration::from_secs(timeout_secs), command.output())
            .await
            .map_err(|_| RemoteError::Timeout(timeout_secs))??;

        let stdout = String::from_utf8_lossy(&output.stdout).trim().to_string();

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();
            return Err(RemoteError::CommandFailed {
                code: output.status.code().unwrap_or(-1),
                output: [stderr, stdout]
                    .into_iter()
                    .filter(|s| !s.is_empty())
                    .collect::<Vec<_>>()
                    .join("\n"),
            });
        }

        Ok(stdout)
    }
}

#[async_trait]
impl RemoteExecutor for SshExecutor {
    async fn probe(&self, ip: &str) -> bool {
        let Ok(addr) = ip.parse::<IpAddr>() else {
            return false;
        };

        matches!(
            timeout(
                PROBE_TIMEOUT,
                TcpStream::connect(SocketAddr::new(addr, SSH_PORT))
            )
            .await,
            Ok(Ok(_))
        )
    }

    async fn run_script(&self, ip: &str, script_name: &str) -> Result<String, RemoteError> {
        let local_path = self.scripts_path.join(script_name);
        if !tokio::fs::try_exists(&local_path).await.unwrap_or(false) {
            return Err(RemoteError::ScriptNotFound(script_name.to_string()));
        }

        if !self.probe(ip).await {
            return Err(RemoteError::Unreachable(ip.to_string()));
        }

        let remote_path = format!("{}/{}", REMOTE_DIR, script_name);

        tracing::info!("Running {} on {}", script_name, ip);

        let mut copy = Command::new("scp");
        copy.args(self.common_args())
            .arg(&local_path)
            .arg(format!("{}:{}", scp_target(&self.user, ip), remote_path));
        self.execute(copy, COPY_TIMEOUT_SECS).await?;

        let mut run = Command::new("ssh");
        run.args(self.common_args())
            .arg(format!("{}@{}", self.user, ip))
            .arg(format!("bash {}", remote_path));
        let output = self.execute(run, RUN_TIMEOUT_SECS).await?;

        tracing::info!("{} finished on {}", script_name, ip);

        Ok(output)
    }
}

/// `scp` needs IPv6 hosts in brackets to tell the address apart from the path separator.
fn scp_target(user: &str, ip: &str) -> String {
    if ip.contains(':') {
        format!("{}@[{}]", user, ip)
    } else {
        format!("{}@{}", user, ip)
    }
}


#[cfg(test)]
pub mod fake {
    use std::{collections::HashSet, sync::Mutex};

    use super::*;

    /// Executor that answers from a fixed set of reachable IPs and records script runs.
    #[derive(Default)]
    pub struct FakeExecutor {
        reachable: HashSet<String>,
        failing_scripts: HashSet<String>,
        pub runs: Mutex<Vec<(String, String)>>,
    }

    impl FakeExecutor {
        pub fn reachable(ips: &[&str]) -> Self {
            Self {
                reachable: ips.iter().map(|ip| ip.to_string()).collect(),
                ..Default::default()
            }
        }

        /// Makes every run of `script_name` exit with code 1.
        pub fn failing(mut self, script_name: &str) -> Self {
            self.failing_scripts.insert(script_name.to_string());
            self
        }

        pub fn runs(&self) -> Vec<(String, String)> {
            self.runs.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl RemoteExecutor for FakeExecutor {
        async fn probe(&self, ip: &str) -> bool {
            self.reachable.contains(ip)
        }

        async fn run_script(&self, ip: &str, script_name: &str) -> Result<String, RemoteError> {
            if !self.reachable.contains(ip) {
                return Err(RemoteError::Unreachable(ip.to_string()));
            }

            self.runs
                .lock()
                .unwrap()
                .push((ip.to_string(), script_name.to_string()));

            if self.failing_scripts.contains(script_name) {
                return Err(RemoteError::CommandFailed {
                    code: 1,
                    output: "boom".to_string(),
                });
            }

            Ok("done".to_string())
        }
    }
}
