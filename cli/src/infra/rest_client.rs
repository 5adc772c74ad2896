//! Versioned REST client for the management endpoints.

use appshell_common::{
    ApplicationDescription, ERR_MESSAGE_CODE_HTTP_FAILURE, ERR_MESSAGE_CODE_MISSING_RESOURCE,
    RestResponse,
};
use reqwest::StatusCode;
use tracing::debug;

use crate::application::ports::DescriptionProvider;
use crate::domain::{RequestError, RestClientError};
use crate::infra::http::{encode_segment, normalize_base};

/// Client for the `/{version}/deployments/...` endpoints.
///
/// Every failure is reported as a [`RestClientError`] carrying a message code.
pub struct RestClient {
    http: reqwest::Client,
    base_url: String,
    api_version: String,
}

impl RestClient {
    #[must_use]
    pub fn new(http: reqwest::Client, base_url: &str, api_version: &str) -> Self {
        Self {
            http,
            base_url: normalize_base(base_url),
            api_version: api_version.trim_matches('/').to_string(),
        }
    }

    fn description_url(&self, application: &str) -> String {
        format!(
            "{}/{}/deployments/applications/{}/description",
            self.base_url,
            self.api_version,
            encode_segment(application)
        )
    }

    /// Fetch the description of `application`.
    ///
    /// # Errors
    ///
    /// Returns the server's `messageId`; `missing_resource` for a bare 404;
    /// `http_failure` for transport failures and unreadable responses.
    pub async fn get_application_description(
        &self,
        application: &str,
    ) -> Result<Option<ApplicationDescription>, RestClientError> {
        let url = self.description_url(application);
        debug!(%url, "GET");

        let response = self.http.get(&url).send().await.map_err(http_failure)?;
        let status = response.status();
        let body = response.text().await.map_err(http_failure)?;

        interpret(&url, status, &body)
    }
}

fn interpret(
    url: &str,
    status: StatusCode,
    body: &str,
) -> Result<Option<ApplicationDescription>, RestClientError> {
    match serde_json::from_str::<RestResponse<ApplicationDescription>>(body) {
        Ok(envelope) if status.is_success() && envelope.is_success() => Ok(envelope.response),
        Ok(RestResponse {
            message_id: Some(message_code),
            message,
            verbose,
            ..
        }) => Err(RestClientError {
            message: message.unwrap_or_else(|| message_code.clone()),
            message_code,
            verbose,
        }),
        _ if status == StatusCode::NOT_FOUND => Err(RestClientError::new(
            ERR_MESSAGE_CODE_MISSING_RESOURCE,
            format!("Resource not found: {url}"),
        )),
        Ok(_) => Err(RestClientError::new(
            ERR_MESSAGE_CODE_HTTP_FAILURE,
            format!("Request to {url} failed: HTTP {status}"),
        )),
        Err(e) => Err(RestClientError::new(
            ERR_MESSAGE_CODE_HTTP_FAILURE,
            format!("Unexpected response from {url} (HTTP {status}): {e}"),
        )),
    }
}

fn http_failure(err: reqwest::Error) -> RestClientError {
    RestClientError::new(ERR_MESSAGE_CODE_HTTP_FAILURE, err.to_string())
}

impl DescriptionProvider for RestClient {
    fn name(&self) -> &'static str {
        "new rest"
    }

    async fn fetch(
        &self,
        application: &str,
    ) -> Result<Option<ApplicationDescription>, RequestError> {
        Ok(self.get_application_description(application).await?)
    }
}
