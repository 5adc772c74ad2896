//! appshell - administrative shell for the application-management platform

#![cfg_attr(test, allow(clippy::expect_used))]

use appshell_cli::cli::Cli;
use appshell_cli::output::{OutputContext, report_error};
use clap::Parser;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    appshell_cli::logging::init(cli.verbose);

    let json = cli.json;
    let ctx = OutputContext::new(cli.no_color, cli.quiet);
    if let Err(e) = cli.run().await {
        report_error(&ctx, json, &e);
        std::process::exit(1);
    }
}
