//! Domain types and validators for appshell session configuration.
//!
//! Pure functions only — no I/O, no async, no filesystem access.

use std::fmt;
use std::str::FromStr;

use appshell_common::{DEFAULT_API_VERSION, DEFAULT_APPLICATION_NAME};
use serde::{Deserialize, Serialize};

use crate::domain::error::ConfigError;

// ── Constants ────────────────────────────────────────────────────────────────

pub const DEFAULT_REST_URL: &str = "http://localhost:8100";
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

// ── Client selection ─────────────────────────────────────────────────────────

/// Which REST client implementation serves management requests.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ClientKind {
    /// Unversioned admin facade.
    #[default]
    Legacy,
    /// Versioned REST client.
    Rest,
}

impl FromStr for ClientKind {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "legacy" => Ok(Self::Legacy),
            "rest" => Ok(Self::Rest),
            _ => Err(ConfigError::UnknownClient(s.to_string())),
        }
    }
}

impl fmt::Display for ClientKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Legacy => f.write_str("legacy"),
            Self::Rest => f.write_str("rest"),
        }
    }
}

// ── Config schema ────────────────────────────────────────────────────────────

/// Top-level configuration stored in `~/.appshell/config.yaml`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AppShellConfig {
    /// Base URL of the management endpoint.
    pub rest_url: String,
    /// Active client implementation.
    pub client: ClientKind,
    /// Version segment for the versioned REST endpoints.
    pub api_version: String,
    /// Request timeout enforced by the transport.
    pub timeout_secs: u64,
    /// Interactive session state.
    pub session: SessionConfig,
}

impl Default for AppShellConfig {
    fn default() -> Self {
        Self {
            rest_url: DEFAULT_REST_URL.to_string(),
            client: ClientKind::default(),
            api_version: DEFAULT_API_VERSION.to_string(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            session: SessionConfig::default(),
        }
    }
}

/// Session state: the application commands operate on.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionConfig {
    /// Currently selected application.
    #[serde(default = "default_application")]
    pub application: String,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            application: default_application(),
        }
    }
}

fn default_application() -> String {
    DEFAULT_APPLICATION_NAME.to_string()
}

/// Values supplied on the command line or through environment variables.
/// Each `Some` wins over the file value.
#[derive(Debug, Clone, Default)]
pub struct ConfigOverrides {
    pub rest_url: Option<String>,
    pub application: Option<String>,
    pub client: Option<ClientKind>,
}

impl AppShellConfig {
    /// Apply command-line / environment overrides on top of the file values.
    #[must_use]
    pub fn with_overrides(mut self, overrides: ConfigOverrides) -> Self {
        if let Some(url) = overrides.rest_url {
            self.rest_url = url;
        }
        if let Some(application) = overrides.application {
            self.session.application = application;
        }
        if let Some(client) = overrides.client {
            self.client = client;
        }
        self
    }

    /// Validate the resolved configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the URL is not http(s) or no application is selected.
    pub fn validate(&self) -> Result<(), ConfigError> {
        validate_rest_url(&self.rest_url)?;
        if self.session.application.trim().is_empty() {
            return Err(ConfigError::EmptyApplication);
        }
        Ok(())
    }
}

// ── Validators ───────────────────────────────────────────────────────────────

/// Validates that the management URL uses an HTTP scheme.
///
/// # Errors
///
/// Returns an error if the URL does not start with `http://` or `https://`.
pub fn validate_rest_url(url: &str) -> Result<(), ConfigError> {
    let lower = url.to_ascii_lowercase();
    let host = lower
        .strip_prefix("http://")
        .or_else(|| lower.strip_prefix("https://"));
    match host {
        Some(rest) if !rest.is_empty() => Ok(()),
        _ => Err(ConfigError::InvalidUrl(url.to_string())),
    }
}

// ── Unit tests ───────────────────────────────────────────────────────────────
