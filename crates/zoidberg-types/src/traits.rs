//! JobService trait and error types.

use crate::{JobId, StatusRecord, StatusRequest, SubmitRequest, SubmitResponse};
use async_trait::async_trait;

/// Remote job service: the two endpoints of a Zoidberg server.
#[async_trait]
pub trait JobService: Send + Sync {
    /// Submit jobs (POST /submit); returns the server's echo with assigned ids.
    async fn submit_batch(
        &self,
        jobs: &[SubmitRequest],
    ) -> Result<Vec<SubmitResponse>, JobServiceError>;

    /// Query jobs (POST /status). Unknown ids are simply absent from the result.
    async fn status_batch(
        &self,
        ids: &[StatusRequest],
    ) -> Result<Vec<StatusRecord>, JobServiceError>;

    /// Submit a single job. Default implementation uses submit_batch and takes the first id.
    async fn submit(&self, job: SubmitRequest) -> Result<JobId, JobServiceError> {
        let resp = self.submit_batch(&[job]).await?;
        resp.into_iter()
            .next()
            .map(|r| r.id)
            .ok_or(JobServiceError::EmptyResponse)
    }

    /// Query a single job. Default implementation uses status_batch.
    async fn status(&self, id: JobId) -> Result<Vec<StatusRecord>, JobServiceError> {
        self.status_batch(&[StatusRequest { id }]).await
    }
}

#[derive(Debug, thiserror::Error)]
pub enum JobServiceError {
    #[error("transport error: {0}")]
    Transport(String),
    #[error("server returned {status}: {body}")]
    Api { status: u16, body: String },
    #[error("malformed response: {0}")]
    Parse(String),
    #[error("empty response")]
    EmptyResponse,
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("ZOIDBERG_SECRET is not set")]
    MissingSecret,
    #[error("ZOIDBERG_SECRET is not a valid header value")]
    InvalidSecret,
    #[error("invalid ZOIDBERG_AUTH value {0:?} (expected \"secret\" or \"none\")")]
    InvalidAuthMode(String),
    #[error("invalid ZOIDBERG_TIMEOUT_SECS value {0:?}")]
    InvalidTimeout(String),
    #[error("client error: {0}")]
    Client(String),
}
