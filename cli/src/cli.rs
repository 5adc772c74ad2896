//! CLI argument parsing with clap derive

use anyhow::Result;
use clap::{Parser, Subcommand};

use crate::app::{AppContext, OutputFlags};
use crate::application::services::config_service;
use crate::commands;
use crate::domain::{ClientKind, ConfigOverrides};
use crate::infra::config::YamlConfigStore;

/// Administrative shell for the application-management platform
#[derive(Parser)]
#[command(
    name = "appshell",
    version,
    propagate_version = true,
    subcommand_required = true,
    arg_required_else_help = true
)]
pub struct Cli {
    /// Output in JSON format
    #[arg(long, global = true)]
    pub json: bool,

    /// Suppress non-error output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Disable colored output (also honored via a non-empty `NO_COLOR`)
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Log request details to stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Management endpoint URL
    #[arg(long, global = true, env = "APPSHELL_REST_URL")]
    pub url: Option<String>,

    /// Application to operate on (defaults to the session application)
    #[arg(short, long, global = true, env = "APPSHELL_APPLICATION")]
    pub application: Option<String>,

    /// REST client implementation: legacy or rest
    #[arg(long, global = true, env = "APPSHELL_CLIENT")]
    pub client: Option<ClientKind>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Lists all deployed services on the current application
    ListServices,
}

impl Cli {
    /// Execute the CLI command.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration cannot be resolved or the command fails.
    pub async fn run(self) -> Result<()> {
        let Cli {
            json,
            quiet,
            no_color,
            url,
            application,
            client,
            command,
            ..
        } = self;

        let overrides = ConfigOverrides {
            rest_url: url,
            application,
            client,
        };
        let config = config_service::load_config(&YamlConfigStore::default(), overrides)?;
        let app = AppContext::new(
            &OutputFlags {
                no_color,
                quiet,
                json,
            },
            config,
        );

        match command {
            Command::ListServices => commands::list_services::run(&app).await,
        }
    }
}
