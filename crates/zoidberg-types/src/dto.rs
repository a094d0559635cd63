//! Request and response DTOs for the Zoidberg job API.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Job id assigned by the server. Printed verbatim and parsed back by the status command.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct JobId(pub i64);

impl fmt::Display for JobId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for JobId {
    type Err = std::num::ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim().parse().map(JobId)
    }
}

/// One entry of the `/submit` request body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubmitRequest {
    pub cmd: String,
    #[serde(default = "default_threads")]
    pub threads: u32,
}

fn default_threads() -> u32 {
    1
}

impl SubmitRequest {
    pub fn new(cmd: impl Into<String>, threads: u32) -> Self {
        Self {
            cmd: cmd.into(),
            threads: threads.max(1),
        }
    }
}

/// One entry of the `/submit` response body. The server echoes the whole job; only `id` is read.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SubmitResponse {
    pub id: JobId,
}

/// One entry of the `/status` request body.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusRequest {
    pub id: JobId,
}

/// One entry of the `/status` response body. Fields other than `status` are ignored.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StatusRecord {
    pub status: crate::ServiceStatus,
}
