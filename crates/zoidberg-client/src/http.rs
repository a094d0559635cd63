//! reqwest-backed JobService talking to a Zoidberg server.

use reqwest::header::{HeaderMap, HeaderValue, COOKIE};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::fmt;
use std::time::Duration;
use zoidberg_types::{
    ConfigError, JobService, JobServiceError, StatusRecord, StatusRequest, SubmitRequest,
    SubmitResponse,
};

pub const DEFAULT_SERVER: &str = "http://localhost:8080";

/// JobService that POSTs JSON to `<server>/submit` and `<server>/status`.
///
/// When a secret is given it is sent verbatim as the `cookie` header on every request.
pub struct HttpJobService {
    client: reqwest::Client,
    server: String,
}

impl HttpJobService {
    pub fn new(
        server: &str,
        secret: Option<&str>,
        timeout: Option<Duration>,
    ) -> Result<Self, ConfigError> {
        let mut headers = HeaderMap::new();
        if let Some(secret) = secret {
            let value = HeaderValue::from_str(secret).map_err(|_| ConfigError::InvalidSecret)?;
            headers.insert(COOKIE, value);
        }
        let mut builder = reqwest::Client::builder().default_headers(headers);
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder
            .build()
            .map_err(|e| ConfigError::Client(e.to_string()))?;
        Ok(Self {
            client,
            server: server.trim_end_matches('/').to_string(),
        })
    }

    pub fn server(&self) -> &str {
        &self.server
    }

    async fn post_json<B, R>(&self, path: &str, body: &B) -> Result<R, JobServiceError>
    where
        B: Serialize + ?Sized + Sync,
        R: DeserializeOwned + Send,
    {
        let url = format!("{}{}", self.server, path);
        tracing::debug!(%url, "POST");
        let res = self
            .client
            .post(&url)
            .json(body)
            .send()
            .await
            .map_err(|e| JobServiceError::Transport(e.to_string()))?;
        let status = res.status();
        let text = res
            .text()
            .await
            .map_err(|e| JobServiceError::Transport(e.to_string()))?;
        if !status.is_success() {
            return Err(JobServiceError::Api {
                status: status.as_u16(),
                body: text,
            });
        }
        if text.trim().is_empty() {
            return Err(JobServiceError::EmptyResponse);
        }
        serde_json::from_str(&text).map_err(|e| JobServiceError::Parse(e.to_string()))
    }
}

impl fmt::Debug for HttpJobService {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HttpJobService")
            .field("server", &self.server)
            .finish()
    }
}

#[async_trait::async_trait]
impl JobService for HttpJobService {
    async fn submit_batch(
        &self,
        jobs: &[SubmitRequest],
    ) -> Result<Vec<SubmitResponse>, JobServiceError> {
        self.post_json("/submit", jobs).await
    }

    async fn status_batch(
        &self,
        ids: &[StatusRequest],
    ) -> Result<Vec<StatusRecord>, JobServiceError> {
        self.post_json("/status", ids).await
    }
}
