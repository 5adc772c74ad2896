//! Selection of the active management client.

use std::time::Duration;

use anyhow::Result;
use appshell_common::ApplicationDescription;

use crate::application::ports::DescriptionProvider;
use crate::domain::{AppShellConfig, ClientKind, RequestError};
use crate::infra::http::build_client;
use crate::infra::legacy_facade::AdminFacade;
use crate::infra::rest_client::RestClient;

/// The client implementation chosen by configuration.
pub enum ActiveProvider {
    Legacy(AdminFacade),
    Rest(RestClient),
}

impl ActiveProvider {
    /// Build the client named by `config.client`.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be constructed.
    pub fn from_config(config: &AppShellConfig) -> Result<Self> {
        let http = build_client(Duration::from_secs(config.timeout_secs))?;
        Ok(match config.client {
            ClientKind::Legacy => Self::Legacy(AdminFacade::new(http, &config.rest_url)),
            ClientKind::Rest => {
                Self::Rest(RestClient::new(http, &config.rest_url, &config.api_version))
            }
        })
    }
}

impl DescriptionProvider for ActiveProvider {
    fn name(&self) -> &'static str {
        match self {
            Self::Legacy(facade) => facade.name(),
            Self::Rest(client) => client.name(),
        }
    }

    async fn fetch(
        &self,
        application: &str,
    ) -> Result<Option<ApplicationDescription>, RequestError> {
        match self {
            Self::Legacy(facade) => facade.fetch(application).await,
            Self::Rest(client) => client.fetch(application).await,
        }
    }
}
