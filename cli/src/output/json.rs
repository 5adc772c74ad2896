//! JSON output helpers.
//!
//! Provides the error-object formatter used by all `--json` code paths when
//! a command fails, and the listing renderer.

use anyhow::{Context, Result};

use crate::domain::ServiceListing;
use crate::output::formatter::listing_to_json;

/// Format a JSON error object.
///
/// Output (pretty-printed):
/// ```json
/// {
///   "error": true,
///   "message": "...",
///   "code": "..."
/// }
/// ```
///
/// # Errors
///
/// Returns an error if JSON serialization fails.
pub fn format_error(message: &str, code: &str) -> Result<String> {
    let obj = serde_json::json!({
        "error": true,
        "message": message,
        "code": code,
    });
    serde_json::to_string_pretty(&obj).context("JSON serialization failed")
}

/// Renders domain types as pretty-printed JSON on stdout.
pub struct JsonRenderer;

impl JsonRenderer {
    /// Render a service listing.
    ///
    /// # Errors
    ///
    /// Returns an error if JSON serialization fails.
    pub fn render_listing(&self, application: &str, listing: &ServiceListing) -> Result<()> {
        let value = listing_to_json(application, listing);
        let text = serde_json::to_string_pretty(&value).context("JSON serialization failed")?;
        println!("{text}");
        Ok(())
    }
}
