//! Response envelopes returned by the two generations of the management API.

use serde::{Deserialize, Serialize};

/// Envelope used by the unversioned (legacy) admin endpoints.
///
/// Success: `{"status": "success", "response": ...}`.
/// Failure: `{"status": "error", "error": "<reason_code>", "error_args": [...]}`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LegacyResponse<T> {
    pub status: String,
    pub response: Option<T>,
    pub error: Option<String>,
    #[serde(default)]
    pub error_args: Vec<String>,
}

impl<T> LegacyResponse<T> {
    #[must_use]
    pub fn is_success(&self) -> bool {
        self.status.eq_ignore_ascii_case("success")
    }
}

/// Envelope used by the versioned REST endpoints.
///
/// Success: `{"status": "Success", "response": ...}`.
/// Failure: `{"status": "Failed", "messageId": "<message_code>", "message": "...", "verbose": "..."}`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RestResponse<T> {
    pub status: String,
    pub response: Option<T>,
    pub message: Option<String>,
    pub message_id: Option<String>,
    pub verbose: Option<String>,
}

impl<T> RestResponse<T> {
    #[must_use]
    pub fn is_success(&self) -> bool {
        self.status.eq_ignore_ascii_case("success")
    }
}
