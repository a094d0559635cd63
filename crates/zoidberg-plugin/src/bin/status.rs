//! Workflow-manager status command: print `running`, `success` or `failed` for a job id.
//!
//! A failed job is a normal report (exit 0); only a failed status check exits non-zero.

use std::process::ExitCode;
use zoidberg_plugin::{parse_job_id, single_arg, status, PluginConfig, PluginError};
use zoidberg_types::Outcome;

async fn run() -> Result<Outcome, PluginError> {
    let id = parse_job_id(&single_arg(std::env::args().skip(1), "job-id")?)?;
    let service = PluginConfig::from_env()?.build_service()?;
    status(&service, id).await
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    zoidberg_plugin::init_tracing();
    match run().await {
        Ok(outcome) => {
            println!("{}", outcome);
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("zoidberg-status: {}", e);
            ExitCode::FAILURE
        }
    }
}
