//! Diagnostic logging to stderr via `tracing`.

use std::io::IsTerminal;

use tracing_subscriber::EnvFilter;

/// Install the global `tracing` subscriber.
///
/// `--verbose` enables debug events for this crate; otherwise `RUST_LOG`
/// applies, defaulting to warnings only. Must be called once, from `main`.
pub fn init(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("warn,appshell_cli=debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_ansi(std::io::stderr().is_terminal())
        .with_target(false)
        .init();
}
