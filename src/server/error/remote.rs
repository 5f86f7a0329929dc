use thiserror::Error;

/// Failures while executing a script on a managed server.
///
/// The `Display` text is returned to the dashboard as the per-IP result message.
#[derive(Error, Debug)]
pub enum RemoteError {
    #[error("Script {0} not found")]
    ScriptNotFound(String),

    #[error("Server {0} is unreachable on port 22")]
    Unreachable(String),

    #[error("Timed out after {0} seconds")]
    Timeout(u64),

    #[error("Script exited with code {code}: {output}")]
    CommandFailed { code: i32, output: String },

    #[error("Failed to start remote command: {0}")]
    Spawn(#[from] std::io::Error),
}
