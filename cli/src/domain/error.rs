//! Typed domain error enums.
//!
//! This module has zero imports from `crate::infra`, `crate::commands`,
//! `crate::application`, `tokio`, or `reqwest`. All error types implement
//! `thiserror::Error` and convert to `anyhow::Error` via the `?` operator.

use appshell_common::{
    ERR_MESSAGE_CODE_MISSING_RESOURCE, ERR_REASON_CODE_COMM_ERROR,
    ERR_REASON_CODE_FAILED_TO_LOCATE_APP,
};
use thiserror::Error;

// ── Status errors (legacy facade + uniform shell taxonomy) ───────────────────

/// Failure carrying a machine-readable reason code plus message arguments.
///
/// Raised by the legacy admin facade, and the shape every "application not
/// found" failure takes by the time it leaves `list-services`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{}", describe_reason(.reason_code, .args))]
pub struct CliStatusError {
    pub reason_code: String,
    pub args: Vec<String>,
}

impl CliStatusError {
    pub fn new<I, S>(reason_code: impl Into<String>, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            reason_code: reason_code.into(),
            args: args.into_iter().map(Into::into).collect(),
        }
    }

    /// The uniform "application not found" failure for `application`.
    #[must_use]
    pub fn application_not_found(application: &str) -> Self {
        Self::new(ERR_REASON_CODE_FAILED_TO_LOCATE_APP, [application])
    }

    /// Case-insensitive reason code comparison.
    #[must_use]
    pub fn has_reason(&self, code: &str) -> bool {
        self.reason_code.eq_ignore_ascii_case(code)
    }
}

fn describe_reason(code: &str, args: &[String]) -> String {
    let first = args.first().map_or("", String::as_str);
    match code.to_ascii_lowercase().as_str() {
        ERR_REASON_CODE_FAILED_TO_LOCATE_APP => {
            format!("Application '{first}' could not be found")
        }
        ERR_REASON_CODE_COMM_ERROR => {
            format!("Failed to communicate with the management endpoint: {}", args.join(" "))
        }
        _ if args.is_empty() => code.to_string(),
        _ => format!("{code}: {}", args.join(", ")),
    }
}

// ── REST client errors ───────────────────────────────────────────────────────

/// Failure reported by the versioned REST client.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct RestClientError {
    pub message_code: String,
    pub message: String,
    /// Server-side detail (stack trace or cause), if the server sent one.
    pub verbose: Option<String>,
}

impl RestClientError {
    pub fn new(message_code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            message_code: message_code.into(),
            message: message.into(),
            verbose: None,
        }
    }

    /// Case-insensitive message code comparison.
    #[must_use]
    pub fn has_message_code(&self, code: &str) -> bool {
        self.message_code.eq_ignore_ascii_case(code)
    }
}

// ── Request errors ───────────────────────────────────────────────────────────

/// A failed application-description request, in the shape of whichever
/// client served it.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RequestError {
    #[error(transparent)]
    Status(#[from] CliStatusError),

    #[error(transparent)]
    Client(#[from] RestClientError),
}

impl RequestError {
    /// Machine-readable code: reason code or message code.
    #[must_use]
    pub fn code(&self) -> &str {
        match self {
            Self::Status(e) => &e.reason_code,
            Self::Client(e) => &e.message_code,
        }
    }

    /// Whether the error means "this application does not exist", judged by
    /// the not-found code of the client that produced it.
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        match self {
            Self::Status(e) => e.has_reason(ERR_REASON_CODE_FAILED_TO_LOCATE_APP),
            Self::Client(e) => e.has_message_code(ERR_MESSAGE_CODE_MISSING_RESOURCE),
        }
    }
}

// ── Config errors ────────────────────────────────────────────────────────────

/// Errors related to session configuration values.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Unknown client '{0}'. Valid clients: legacy, rest")]
    UnknownClient(String),

    #[error("Invalid management URL '{0}': must start with http:// or https://")]
    InvalidUrl(String),

    #[error("Application name must not be empty")]
    EmptyApplication,
}
