//! Output formatting module

pub mod formatter;
pub mod human;
pub mod json;
pub mod styles;

use anyhow::Result;
use console::Term;
use owo_colors::OwoColorize as _;

pub use human::HumanRenderer;
pub use json::JsonRenderer;
pub use styles::Styles;

use crate::domain::{ConfigError, RequestError, ServiceListing};

/// Whether a `NO_COLOR` value asks for plain output. Any non-empty value does.
#[must_use]
pub fn no_color_requested(value: Option<&std::ffi::OsStr>) -> bool {
    value.is_some_and(|v| !v.is_empty())
}

/// Output context carrying styling and terminal state.
pub struct OutputContext {
    /// Stylesheet for colored output.
    pub styles: Styles,
    /// Whether stdout is a TTY.
    pub is_tty: bool,
    /// Whether to suppress non-error output.
    pub quiet: bool,
}

impl OutputContext {
    /// Create output context based on CLI flags and environment.
    #[must_use]
    pub fn new(no_color: bool, quiet: bool) -> Self {
        let is_tty = Term::stdout().is_term();
        let use_colors =
            !no_color && is_tty && !no_color_requested(std::env::var_os("NO_COLOR").as_deref());

        let mut styles = Styles::default();
        if use_colors {
            styles.colorize();
        }

        Self {
            styles,
            is_tty,
            quiet,
        }
    }

    /// Check if hints and progress indicators should be shown.
    #[must_use]
    pub fn show_progress(&self) -> bool {
        self.is_tty && !self.quiet
    }

    /// Print an error message prefixed with `✗` to stderr. Never suppressed.
    pub fn error(&self, msg: &str) {
        eprintln!("  {} {msg}", "✗".style(self.styles.error));
    }

    /// Print an info message prefixed with `ℹ`. Suppressed when `quiet`.
    pub fn info(&self, msg: &str) {
        if !self.quiet {
            println!("  {} {msg}", "ℹ".style(self.styles.info));
        }
    }
}

/// Output renderer selected by the `--json` flag.
pub enum Renderer<'a> {
    Human(HumanRenderer<'a>),
    Json(JsonRenderer),
}

impl Renderer<'_> {
    /// Render a service listing in the active format.
    ///
    /// # Errors
    ///
    /// Returns an error if JSON serialization fails.
    pub fn render_listing(&self, application: &str, listing: &ServiceListing) -> Result<()> {
        match self {
            Self::Human(r) => {
                r.render_listing(application, listing);
                Ok(())
            }
            Self::Json(r) => r.render_listing(application, listing),
        }
    }
}

/// Machine-readable code for a command failure.
///
/// Request errors keep their reason / message code; everything else maps to
/// a generic code.
#[must_use]
pub fn error_code(err: &anyhow::Error) -> &str {
    if let Some(request) = err.downcast_ref::<RequestError>() {
        return request.code();
    }
    if err.downcast_ref::<ConfigError>().is_some() {
        return "invalid_config";
    }
    "error"
}

/// Report a failed command on the channel matching the output mode.
///
/// JSON mode prints an error object on stdout; human mode prints to stderr.
pub fn report_error(ctx: &OutputContext, json: bool, err: &anyhow::Error) {
    let message = format!("{err:#}");
    if json {
        match json::format_error(&message, error_code(err)) {
            Ok(text) => println!("{text}"),
            Err(_) => eprintln!("Error: {message}"),
        }
    } else {
        ctx.error(&format!("Error: {message}"));
    }
}
