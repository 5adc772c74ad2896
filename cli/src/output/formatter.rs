//! Application description formatting.

use appshell_common::ApplicationDescription;
use serde_json::{Value, json};

use crate::domain::ServiceListing;

/// Render the service names of `description`, one per line, in server order.
///
/// Returns an empty string when there is no description or no services.
#[must_use]
pub fn format_application_description(description: Option<&ApplicationDescription>) -> String {
    description
        .map(|desc| desc.service_names().join("\n"))
        .unwrap_or_default()
}

/// JSON form of a listing: `{"application": ..., "services": [...]}`.
#[must_use]
pub fn listing_to_json(application: &str, listing: &ServiceListing) -> Value {
    let services = listing
        .description()
        .map(ApplicationDescription::service_names)
        .unwrap_or_default();
    json!({
        "application": application,
        "services": services,
    })
}
