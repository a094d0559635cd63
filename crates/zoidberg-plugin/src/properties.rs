//! Job properties embedded in a workflow job script.
//!
//! The workflow manager writes a line `# properties = {...json...}` into each job script. Only
//! `threads` is read; anything missing or malformed falls back to one thread.

use serde_json::Value;
use std::path::Path;

const MARKER: &str = "# properties";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct JobProperties {
    pub threads: u32,
}

impl Default for JobProperties {
    fn default() -> Self {
        Self { threads: 1 }
    }
}

impl JobProperties {
    pub fn from_jobscript(path: &Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(content) => Self::parse(&content),
            Err(e) => {
                tracing::debug!(path = %path.display(), error = %e, "job script not readable");
                Self::default()
            }
        }
    }

    pub fn parse(content: &str) -> Self {
        let Some(line) = content.lines().find(|l| l.trim_start().starts_with(MARKER)) else {
            return Self::default();
        };
        let Some((_, json)) = line.split_once('=') else {
            tracing::warn!("properties line has no '='");
            return Self::default();
        };
        let props: Value = match serde_json::from_str(json.trim()) {
            Ok(v) => v,
            Err(e) => {
                tracing::warn!(error = %e, "malformed job properties");
                return Self::default();
            }
        };
        let threads = props
            .get("threads")
            .and_then(Value::as_u64)
            .filter(|t| *t >= 1)
            .map(|t| u32::try_from(t).unwrap_or(u32::MAX))
            .unwrap_or(1);
        Self { threads }
    }
}
