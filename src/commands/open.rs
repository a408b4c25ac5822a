use owo_colors::OwoColorize;
use serde_json::json;

use super::CommandOutput;
use super::tickets::cmd_tickets;
use crate::cli::OutputOptions;
use crate::error::Result;
use crate::router::{Resolution, Route, resolve};
use crate::types::VALID_PRIORITIES;
use crate::views::SubmitView;
use crate::views::validator::{DESCRIPTION_MIN_LEN, FormField, TITLE_MIN_LEN};

/// Resolve a path and show the view it maps to
pub async fn cmd_open(path: &str, output: OutputOptions) -> Result<()> {
    let resolution = resolve(path)?;
    if let Resolution::Redirect(route) = resolution {
        tracing::info!("redirecting '{}' to {}", path, route);
    }

    match resolution.route() {
        Route::Tickets => cmd_tickets(false, output).await,
        Route::Submit => show_submit_form(resolution, output),
    }
}

/// Print the blank submission form with its field rules
fn show_submit_form(resolution: Resolution, output: OutputOptions) -> Result<()> {
    let mut view = SubmitView::new();
    view.on_shown();

    let priority = view.field(FormField::Priority).to_string();

    let mut text = String::new();
    if let Resolution::Redirect(route) = resolution {
        text.push_str(&format!("{}\n\n", format!("Redirected to {route}").dimmed()));
    }
    text.push_str(&format!("{}\n\n", "Submit a ticket".cyan().bold()));
    text.push_str(&format!(
        "  {:12} required, at least {} characters\n",
        FormField::Title.name(),
        TITLE_MIN_LEN
    ));
    text.push_str(&format!(
        "  {:12} required, at least {} characters\n",
        FormField::Description.name(),
        DESCRIPTION_MIN_LEN
    ));
    text.push_str(&format!(
        "  {:12} one of {} (default: {})\n\n",
        FormField::Priority.name(),
        VALID_PRIORITIES.join(", "),
        priority
    ));
    text.push_str(
        &"Use `ticketdesk submit --title ... --description ...` to send it"
            .dimmed()
            .to_string(),
    );

    CommandOutput::new(json!({
        "route": Route::Submit.path(),
        "redirected": matches!(resolution, Resolution::Redirect(_)),
        "fields": {
            "title": { "min_length": TITLE_MIN_LEN, "value": view.field(FormField::Title) },
            "description": { "min_length": DESCRIPTION_MIN_LEN, "value": view.field(FormField::Description) },
            "priority": { "allowed": VALID_PRIORITIES, "value": priority },
        },
    }))
    .with_text(text)
    .print(output)
}
