//! Human-readable terminal renderer.

use crate::domain::ServiceListing;
use crate::output::OutputContext;
use crate::output::formatter::format_application_description;

/// Renders domain types as human-readable terminal output using `OutputContext`.
pub struct HumanRenderer<'a> {
    ctx: &'a OutputContext,
}

impl<'a> HumanRenderer<'a> {
    /// Create a new `HumanRenderer` wrapping the given output context.
    #[must_use]
    pub fn new(ctx: &'a OutputContext) -> Self {
        Self { ctx }
    }

    /// Render a service listing.
    ///
    /// Stdout carries exactly the formatted service names; the "nothing
    /// deployed" hint only appears on an interactive terminal.
    pub fn render_listing(&self, application: &str, listing: &ServiceListing) {
        let text = format_application_description(listing.description());
        if text.is_empty() {
            if self.ctx.show_progress() {
                self.ctx
                    .info(&format!("No services deployed on application '{application}'"));
            }
            return;
        }
        println!("{text}");
    }
}
