//! Plugin configuration from the environment.

use std::time::Duration;
use zoidberg_client::{HttpJobService, DEFAULT_SERVER};
use zoidberg_types::ConfigError;

/// How requests authenticate to the server.
#[derive(Clone, PartialEq, Eq)]
pub enum AuthMode {
    /// Send the shared secret as the `cookie` header.
    Secret(String),
    /// Send no credential (servers predating authentication).
    None,
}

impl std::fmt::Debug for AuthMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AuthMode::Secret(_) => f.write_str("Secret(..)"),
            AuthMode::None => f.write_str("None"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PluginConfig {
    pub server: String,
    pub auth: AuthMode,
    pub timeout: Option<Duration>,
}

impl PluginConfig {
    /// Read `ZOIDBERG_SERVER`, `ZOIDBERG_AUTH`, `ZOIDBERG_SECRET` and `ZOIDBERG_TIMEOUT_SECS`.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let server = lookup("ZOIDBERG_SERVER")
            .filter(|s| !s.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_SERVER.to_string());

        let auth = match lookup("ZOIDBERG_AUTH").as_deref().map(str::trim) {
            None | Some("") | Some("secret") => {
                AuthMode::Secret(lookup("ZOIDBERG_SECRET").ok_or(ConfigError::MissingSecret)?)
            }
            Some("none") => AuthMode::None,
            Some(other) => return Err(ConfigError::InvalidAuthMode(other.to_string())),
        };

        let timeout = match lookup("ZOIDBERG_TIMEOUT_SECS") {
            None => None,
            Some(raw) => {
                let secs: u64 = raw
                    .trim()
                    .parse()
                    .map_err(|_| ConfigError::InvalidTimeout(raw.clone()))?;
                Some(Duration::from_secs(secs))
            }
        };

        Ok(Self {
            server: server.trim().to_string(),
            auth,
            timeout,
        })
    }

    pub fn build_service(&self) -> Result<HttpJobService, ConfigError> {
        let secret = match &self.auth {
            AuthMode::Secret(s) => Some(s.as_str()),
            AuthMode::None => None,
        };
        HttpJobService::new(&self.server, secret, self.timeout)
    }
}
