//! `appshell list-services` — list the services deployed on the current application.

use anyhow::Result;

use crate::app::AppContext;
use crate::application::ports::DescriptionProvider;
use crate::application::services::list_services::list_services;
use crate::infra::provider::ActiveProvider;

/// Run `appshell list-services` against the configured client.
///
/// # Errors
///
/// Returns an error if the client cannot be built or the request fails.
pub async fn run(app: &AppContext) -> Result<()> {
    let provider = ActiveProvider::from_config(&app.config)?;
    run_with(app, &provider).await
}

/// Run `appshell list-services` against an explicit provider.
///
/// # Errors
///
/// Returns the request error (see [`list_services`]) or a rendering error.
pub async fn run_with(app: &AppContext, provider: &impl DescriptionProvider) -> Result<()> {
    let application = app.current_application();
    let listing = list_services(provider, application).await?;
    app.renderer().render_listing(application, &listing)
}
