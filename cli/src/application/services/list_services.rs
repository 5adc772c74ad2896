//! Application service — list the services deployed on an application.

use tracing::debug;

use crate::application::ports::DescriptionProvider;
use crate::domain::{RequestError, ServiceListing, resolve_listing};

/// List the services of `application` through `provider`.
///
/// Issues exactly one request. A missing default application yields
/// [`ServiceListing::NotFoundBenign`]; see [`resolve_listing`] for the rest.
///
/// # Errors
///
/// Returns the request error, translated to `failed_to_locate_app` when a
/// named application does not exist.
pub async fn list_services(
    provider: &impl DescriptionProvider,
    application: &str,
) -> Result<ServiceListing, RequestError> {
    debug!(
        application,
        client = provider.name(),
        "list-services using the {} client",
        provider.name()
    );

    let listing = resolve_listing(application, provider.fetch(application).await);

    match &listing {
        Ok(ServiceListing::Found(desc)) => {
            debug!(services = desc.services_description.len(), "application described");
        }
        Ok(ServiceListing::Empty) => debug!("server returned no description"),
        Ok(ServiceListing::NotFoundBenign) => {
            debug!("default application not deployed yet; nothing to list");
        }
        Err(err) => debug!(code = err.code(), "list-services failed"),
    }
    listing
}
