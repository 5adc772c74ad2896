//! Port trait definitions for the Application layer.
//!
//! Ports are the interfaces (contracts) that infrastructure must fulfill.
//! This file imports only from `crate::domain` and the shared API types —
//! never from `crate::infra`, `crate::commands`, or `crate::output`.

use std::path::PathBuf;

use anyhow::Result;
use appshell_common::ApplicationDescription;

use crate::domain::{AppShellConfig, RequestError};

// ── Description Provider Port ─────────────────────────────────────────────────

/// Fetches an application description from the management endpoint.
///
/// Implemented by both the legacy admin facade and the versioned REST client,
/// each reporting failures in its own [`RequestError`] variant.
#[allow(async_fn_in_trait)]
pub trait DescriptionProvider {
    /// Short client name used in log events.
    fn name(&self) -> &'static str;

    /// Request the description of `application`.
    ///
    /// `Ok(None)` means the server answered without a description.
    async fn fetch(&self, application: &str)
    -> Result<Option<ApplicationDescription>, RequestError>;
}

// ── Config Port ───────────────────────────────────────────────────────────────

/// Abstracts loading of the persisted session configuration.
pub trait ConfigStore {
    /// Load configuration, falling back to defaults when none is stored.
    fn load(&self) -> Result<AppShellConfig>;
    /// Location of the backing file.
    fn path(&self) -> Result<PathBuf>;
}
