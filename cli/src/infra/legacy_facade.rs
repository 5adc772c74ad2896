//! Legacy admin facade — unversioned management endpoints.

use appshell_common::{ApplicationDescription, ERR_REASON_CODE_COMM_ERROR, LegacyResponse};
use reqwest::StatusCode;
use tracing::debug;

use crate::application::ports::DescriptionProvider;
use crate::domain::{CliStatusError, RequestError};
use crate::infra::http::{encode_segment, normalize_base};

/// Client for the unversioned admin endpoints.
///
/// Every failure, including transport failures, is reported as a
/// [`CliStatusError`] carrying a reason code.
pub struct AdminFacade {
    http: reqwest::Client,
    base_url: String,
}

impl AdminFacade {
    #[must_use]
    pub fn new(http: reqwest::Client, base_url: &str) -> Self {
        Self {
            http,
            base_url: normalize_base(base_url),
        }
    }

    fn description_url(&self, application: &str) -> String {
        format!(
            "{}/service/applications/{}/services/description",
            self.base_url,
            encode_segment(application)
        )
    }

    /// Fetch the description of the services deployed on `application`.
    ///
    /// # Errors
    ///
    /// Returns the server's reason code, or `comm_error` when the endpoint
    /// cannot be reached or answers with an unreadable body.
    pub async fn get_services_description_list(
        &self,
        application: &str,
    ) -> Result<Option<ApplicationDescription>, CliStatusError> {
        let url = self.description_url(application);
        debug!(%url, "GET");

        let response = self.http.get(&url).send().await.map_err(comm_error)?;
        let status = response.status();
        let body = response.text().await.map_err(comm_error)?;

        interpret(status, &body)
    }
}

fn interpret(
    status: StatusCode,
    body: &str,
) -> Result<Option<ApplicationDescription>, CliStatusError> {
    let envelope: LegacyResponse<ApplicationDescription> =
        serde_json::from_str(body).map_err(|e| {
            CliStatusError::new(
                ERR_REASON_CODE_COMM_ERROR,
                [format!("unexpected response (HTTP {status}): {e}")],
            )
        })?;

    if status.is_success() && envelope.is_success() {
        return Ok(envelope.response);
    }
    match envelope.error {
        Some(reason_code) => Err(CliStatusError::new(reason_code, envelope.error_args)),
        None => Err(CliStatusError::new(
            ERR_REASON_CODE_COMM_ERROR,
            [format!("HTTP {status}")],
        )),
    }
}

fn comm_error(err: reqwest::Error) -> CliStatusError {
    CliStatusError::new(ERR_REASON_CODE_COMM_ERROR, [err.to_string()])
}

impl DescriptionProvider for AdminFacade {
    fn name(&self) -> &'static str {
        "legacy"
    }

    async fn fetch(
        &self,
        application: &str,
    ) -> Result<Option<ApplicationDescription>, RequestError> {
        Ok(self.get_services_description_list(application).await?)
    }
}
