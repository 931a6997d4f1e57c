//! Gateway configuration.
//!
//! `GatewayConfig` is loaded once from `ICALGW_*` environment variables at
//! startup and passed explicitly through application state -- handlers never
//! read the environment themselves. Credential values may legitimately be
//! absent at boot; [`GatewayConfig::credentials`] resolves them per request
//! and names the missing variable, so a misconfigured deployment answers
//! with a 500 instead of refusing to start.

use std::fmt;
use std::str::FromStr;
use std::time::Duration;

use secrecy::SecretString;

use crate::error::ConfigError;

/// Environment variable holding the application identifier.
pub const ENV_APP_ID: &str = "ICALGW_APP_ID";
/// Environment variable holding the static backend API key (direct mode).
pub const ENV_API_KEY: &str = "ICALGW_API_KEY";
/// Environment variable overriding the backend base URL.
pub const ENV_BACKEND_URL: &str = "ICALGW_BACKEND_URL";
/// Environment variable selecting the backend transport.
pub const ENV_BACKEND_MODE: &str = "ICALGW_BACKEND_MODE";
/// Environment variable overriding the outbound call timeout, in seconds.
pub const ENV_BACKEND_TIMEOUT_SECS: &str = "ICALGW_BACKEND_TIMEOUT_SECS";

const DEFAULT_BACKEND_URL: &str = "https://app.base44.com";
const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Which transport the gateway uses to reach the backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BackendMode {
    /// Authenticated POST carrying the static `api_key` header.
    Direct,
    /// Forwarded inbound headers plus an injected app-identity header.
    Context,
}

impl fmt::Display for BackendMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BackendMode::Direct => write!(f, "direct"),
            BackendMode::Context => write!(f, "context"),
        }
    }
}

impl FromStr for BackendMode {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "direct" => Ok(BackendMode::Direct),
            "context" => Ok(BackendMode::Context),
            other => Err(ConfigError::Invalid {
                name: ENV_BACKEND_MODE,
                reason: format!("'{other}' is not one of: direct, context"),
            }),
        }
    }
}

/// Per-request backend credentials resolved from [`GatewayConfig`].
#[derive(Debug, Clone)]
pub struct Credentials {
    /// Application identifier forwarded to the backend.
    pub app_id: String,
    /// Static API key; present only in direct mode.
    pub api_key: Option<SecretString>,
}

/// Process-wide gateway configuration, immutable after startup.
#[derive(Clone)]
pub struct GatewayConfig {
    pub app_id: Option<String>,
    pub api_key: Option<SecretString>,
    pub backend_url: String,
    pub mode: BackendMode,
    pub timeout: Duration,
}

impl Default for GatewayConfig {
    fn default() -> Self {
        Self {
            app_id: None,
            api_key: None,
            backend_url: DEFAULT_BACKEND_URL.to_string(),
            mode: BackendMode::Context,
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }
}

impl GatewayConfig {
    /// Load configuration from the environment.
    ///
    /// Absent credential variables are tolerated (resolved per request);
    /// present-but-invalid values fail here so a bad deployment is caught
    /// at boot.
    pub fn from_env() -> Result<Self, ConfigError> {
        let mut config = Self::default();

        if let Some(app_id) = read_var(ENV_APP_ID) {
            config.app_id = Some(app_id);
        }
        if let Some(api_key) = read_var(ENV_API_KEY) {
            config.api_key = Some(SecretString::from(api_key));
        }
        if let Some(url) = read_var(ENV_BACKEND_URL) {
            config.backend_url = url.trim_end_matches('/').to_string();
        }
        if let Some(mode) = read_var(ENV_BACKEND_MODE) {
            config.mode = mode.parse()?;
        }
        if let Some(secs) = read_var(ENV_BACKEND_TIMEOUT_SECS) {
            let secs: u64 = secs.parse().map_err(|_| ConfigError::Invalid {
                name: ENV_BACKEND_TIMEOUT_SECS,
                reason: format!("'{secs}' is not a number of seconds"),
            })?;
            config.timeout = Duration::from_secs(secs);
        }

        Ok(config)
    }

    /// Resolve the credentials the configured mode requires.
    ///
    /// Both modes need the application identifier; direct mode additionally
    /// needs the static API key. The error names the missing variable.
    pub fn credentials(&self) -> Result<Credentials, ConfigError> {
        let app_id = self
            .app_id
            .clone()
            .ok_or(ConfigError::Missing(ENV_APP_ID))?;

        let api_key = match self.mode {
            BackendMode::Direct => Some(
                self.api_key
                    .clone()
                    .ok_or(ConfigError::Missing(ENV_API_KEY))?,
            ),
            BackendMode::Context => None,
        };

        Ok(Credentials { app_id, api_key })
    }
}

/// Read an environment variable, treating empty values as absent.
fn read_var(name: &str) -> Option<String> {
    match std::env::var(name) {
        Ok(val) if !val.trim().is_empty() => Some(val),
        _ => None,
    }
}
