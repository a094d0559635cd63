//! The two plugin commands, independent of process I/O.

use crate::{JobProperties, PluginError};
use std::path::Path;
use zoidberg_types::{JobId, JobService, Outcome, SubmitRequest};

/// Submit `jobscript` as a job; the command is the script path itself.
pub async fn submit<S>(service: &S, jobscript: &Path) -> Result<JobId, PluginError>
where
    S: JobService + ?Sized,
{
    let props = JobProperties::from_jobscript(jobscript);
    let cmd = jobscript.to_string_lossy();
    tracing::debug!(%cmd, threads = props.threads, "submitting job");
    let id = service.submit(SubmitRequest::new(cmd, props.threads)).await?;
    tracing::debug!(%id, "job submitted");
    Ok(id)
}

/// Look up `id` and translate the reported state.
pub async fn status<S>(service: &S, id: JobId) -> Result<Outcome, PluginError>
where
    S: JobService + ?Sized,
{
    let records = service.status(id).await?;
    if let Some(record) = records.first() {
        tracing::debug!(%id, label = record.status.label(), "job status");
    } else {
        tracing::debug!(%id, "job unknown to server");
    }
    Ok(Outcome::from_records(&records)?)
}

pub fn parse_job_id(arg: &str) -> Result<JobId, PluginError> {
    arg.parse()
        .map_err(|_| PluginError::Usage(format!("job id must be an integer, got {:?}", arg)))
}

/// Take exactly one positional argument.
pub fn single_arg<I>(args: I, name: &str) -> Result<String, PluginError>
where
    I: IntoIterator<Item = String>,
{
    let mut args = args.into_iter();
    match (args.next(), args.next()) {
        (Some(arg), None) => Ok(arg),
        _ => Err(PluginError::Usage(format!("expected exactly one argument <{}>", name))),
    }
}
