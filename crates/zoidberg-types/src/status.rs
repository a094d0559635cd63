//! Status vocabulary: the labels the server reports and the three words the workflow manager reads.

use crate::StatusRecord;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Status as sent by the server.
///
/// The server serializes its status enum externally tagged, so unit variants arrive as plain
/// strings (`"Completed"`) and data-carrying variants as single-key objects (`{"Running": 3}`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ServiceStatus {
    Label(String),
    Tagged(serde_json::Map<String, serde_json::Value>),
}

impl ServiceStatus {
    /// Variant name: the string itself, or the key of a tagged object.
    pub fn label(&self) -> &str {
        match self {
            ServiceStatus::Label(s) => s,
            ServiceStatus::Tagged(map) => map.keys().next().map(String::as_str).unwrap_or(""),
        }
    }
}

impl From<&str> for ServiceStatus {
    fn from(s: &str) -> Self {
        ServiceStatus::Label(s.to_string())
    }
}

/// Job state in the vocabulary the workflow manager expects.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Outcome {
    Running,
    Success,
    Failed,
}

impl Outcome {
    pub fn as_str(&self) -> &'static str {
        match self {
            Outcome::Running => "running",
            Outcome::Success => "success",
            Outcome::Failed => "failed",
        }
    }

    /// Translate one server label. Any label containing `Running` is a running job.
    pub fn from_label(label: &str) -> Result<Self, StatusError> {
        if label.contains("Running") {
            return Ok(Outcome::Running);
        }
        match label {
            "Submitted" => Ok(Outcome::Running),
            "Completed" => Ok(Outcome::Success),
            "Failed" => Ok(Outcome::Failed),
            other => Err(StatusError::Unrecognized(other.to_string())),
        }
    }

    /// Translate a `/status` response. An empty list means the server does not know the job,
    /// which is reported as `failed`.
    pub fn from_records(records: &[StatusRecord]) -> Result<Self, StatusError> {
        match records.first() {
            None => Ok(Outcome::Failed),
            Some(record) => Self::from_label(record.status.label()),
        }
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, thiserror::Error)]
pub enum StatusError {
    #[error("unrecognized job status: {0:?}")]
    Unrecognized(String),
}
