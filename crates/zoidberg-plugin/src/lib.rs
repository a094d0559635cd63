//! Submit and status commands for running workflow jobs on a Zoidberg server.
//!
//! The workflow manager calls `zoidberg-submit <jobscript>` and reads a job id from stdout, then
//! polls `zoidberg-status <id>` and reads one of `running`, `success` or `failed`. Everything
//! else (logs, errors) goes to stderr.

pub mod commands;
pub mod config;
pub mod properties;

pub use commands::{parse_job_id, single_arg, status, submit};
pub use config::{AuthMode, PluginConfig};
pub use properties::JobProperties;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use zoidberg_types::{ConfigError, JobServiceError, StatusError};

#[derive(Debug, thiserror::Error)]
pub enum PluginError {
    #[error("usage: {0}")]
    Usage(String),
    #[error("config: {0}")]
    Config(#[from] ConfigError),
    #[error("job service: {0}")]
    Service(#[from] JobServiceError),
    #[error("status: {0}")]
    Status(#[from] StatusError),
}

/// Install the stderr log subscriber. Filter comes from `RUST_LOG`, default `warn`.
pub fn init_tracing() {
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "warn".into()),
        ))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}
