//! Domain layer — pure business logic, types, and validation.
//!
//! This module has zero imports from `crate::infra`, `crate::commands`,
//! `crate::application`, `tokio`, or `reqwest`.
//! All functions are synchronous and take data in, returning data out.

pub mod config;
pub mod error;
pub mod listing;

pub use config::{AppShellConfig, ClientKind, ConfigOverrides, SessionConfig};
pub use error::{CliStatusError, ConfigError, RequestError, RestClientError};
pub use listing::{ServiceListing, is_default_application, resolve_listing};
