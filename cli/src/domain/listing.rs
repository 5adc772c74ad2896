//! Service listing outcome and the not-found fallback policy.
//!
//! Both client paths feed their raw result through [`resolve_listing`], so
//! the legacy facade and the REST client cannot drift apart.

use appshell_common::{ApplicationDescription, DEFAULT_APPLICATION_NAME};

use crate::domain::error::{CliStatusError, RequestError};

/// Successful outcome of a `list-services` request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ServiceListing {
    /// The server described the application.
    Found(ApplicationDescription),
    /// The server answered without a description.
    Empty,
    /// The default application has not been deployed yet.
    NotFoundBenign,
}

impl ServiceListing {
    #[must_use]
    pub fn description(&self) -> Option<&ApplicationDescription> {
        match self {
            Self::Found(desc) => Some(desc),
            Self::Empty | Self::NotFoundBenign => None,
        }
    }
}

/// Whether `name` is the implicit default application (ASCII case-insensitive).
#[must_use]
pub fn is_default_application(name: &str) -> bool {
    name.eq_ignore_ascii_case(DEFAULT_APPLICATION_NAME)
}

/// Map a raw description request result to a listing or a boundary error.
///
/// - not-found on the default application becomes [`ServiceListing::NotFoundBenign`];
/// - not-found on any other application surfaces as
///   `failed_to_locate_app`: legacy errors pass through untouched, REST
///   errors are translated;
/// - every other error is returned unchanged.
///
/// # Errors
///
/// Returns the (possibly translated) request error when the fallback does not apply.
pub fn resolve_listing(
    application: &str,
    fetched: Result<Option<ApplicationDescription>, RequestError>,
) -> Result<ServiceListing, RequestError> {
    match fetched {
        Ok(Some(desc)) => Ok(ServiceListing::Found(desc)),
        Ok(None) => Ok(ServiceListing::Empty),
        Err(err) if err.is_not_found() => {
            if is_default_application(application) {
                return Ok(ServiceListing::NotFoundBenign);
            }
            match err {
                RequestError::Status(_) => Err(err),
                RequestError::Client(_) => {
                    Err(CliStatusError::application_not_found(application).into())
                }
            }
        }
        Err(err) => Err(err),
    }
}
