//! Workflow-manager submit command: submit a job script, print its job id.

use std::path::PathBuf;
use std::process::ExitCode;
use zoidberg_plugin::{single_arg, submit, PluginConfig, PluginError};
use zoidberg_types::JobId;

async fn run() -> Result<JobId, PluginError> {
    let jobscript = PathBuf::from(single_arg(std::env::args().skip(1), "jobscript")?);
    let service = PluginConfig::from_env()?.build_service()?;
    submit(&service, &jobscript).await
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    zoidberg_plugin::init_tracing();
    match run().await {
        Ok(id) => {
            println!("{}", id);
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("zoidberg-submit: {}", e);
            ExitCode::FAILURE
        }
    }
}
