//! Application service — configuration use-cases.

use anyhow::{Context, Result};
use tracing::debug;

use crate::application::ports::ConfigStore;
use crate::domain::{AppShellConfig, ConfigOverrides};

/// Load the stored configuration, apply overrides, and validate the result.
///
/// # Errors
///
/// Returns an error if the store cannot be read or the resolved values are invalid.
pub fn load_config(store: &impl ConfigStore, overrides: ConfigOverrides) -> Result<AppShellConfig> {
    let config = store.load()?.with_overrides(overrides);
    config.validate().context("invalid configuration")?;
    debug!(
        rest_url = %config.rest_url,
        client = %config.client,
        application = %config.session.application,
        "configuration resolved"
    );
    Ok(config)
}
