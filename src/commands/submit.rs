use owo_colors::OwoColorize;
use serde_json::json;

use super::{CommandOutput, backend_client};
use crate::cli::OutputOptions;
use crate::display::{format_ticket_line, ticket_to_json};
use crate::error::{DeskError, Result};
use crate::remote::TicketApi;
use crate::types::TicketPriority;
use crate::views::SubmitOutcome;
use crate::views::SubmitView;

/// Fill the submission form and submit it
pub async fn cmd_submit(
    title: &str,
    description: &str,
    priority: TicketPriority,
    output: OutputOptions,
) -> Result<()> {
    let client = backend_client()?;
    submit_with(&client, title, description, priority, output).await
}

pub(crate) async fn submit_with<A: TicketApi>(
    api: &A,
    title: &str,
    description: &str,
    priority: TicketPriority,
    output: OutputOptions,
) -> Result<()> {
    let mut view = SubmitView::new();
    view.on_shown();
    view.set_title(title);
    view.set_description(description);
    view.set_priority(priority);

    match view.submit(api).await {
        SubmitOutcome::Created(ticket) => {
            let text = format!(
                "{}\n{}",
                "Ticket submitted successfully".green(),
                format_ticket_line(&ticket)
            );
            CommandOutput::new(json!({
                "action": "submitted",
                "success": view.submit_success,
                "ticket": ticket_to_json(&ticket),
            }))
            .with_text(text)
            .print(output)
        }
        SubmitOutcome::Invalid(validation) => {
            for message in validation.messages() {
                eprintln!("{} {}", "✗".red(), message);
            }
            Err(DeskError::Validation(format!(
                "{} field(s) failed validation",
                validation.failing_fields().len()
            )))
        }
        SubmitOutcome::Failed => Err(DeskError::Other(view.submit_error.clone())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{NewTicket, Ticket, TicketId};
    use crate::views::submit::SUBMIT_ERROR_MESSAGE;
    use std::sync::Mutex;

    struct FakeApi {
        fail: bool,
        received: Mutex<Vec<NewTicket>>,
    }

    impl FakeApi {
        fn new(fail: bool) -> Self {
            Self {
                fail,
                received: Mutex::new(Vec::new()),
            }
        }
    }

    impl TicketApi for FakeApi {
        async fn create_ticket(&self, ticket: &NewTicket) -> Result<Ticket> {
            self.received.lock().unwrap().push(ticket.clone());
            if self.fail {
                return Err(DeskError::Other("connection refused".to_string()));
            }
            let mut created = Ticket::from(ticket.clone());
            created.id = Some(TicketId::Number(1));
            Ok(created)
        }

        async fn get_all_tickets(&self) -> Result<Vec<Ticket>> {
            Ok(Vec::new())
        }

        async fn get_ticket(&self, _id: &TicketId) -> Result<Ticket> {
            Err(DeskError::Other("not found".to_string()))
        }
    }

    #[tokio::test]
    async fn test_submit_success() {
        let api = FakeApi::new(false);
        let result = submit_with(
            &api,
            "Printer",
            "The printer is out of toner",
            TicketPriority::Low,
            OutputOptions { json: true },
        )
        .await;
        assert!(result.is_ok());
        assert_eq!(api.received.lock().unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_submit_invalid_never_calls_backend() {
        let api = FakeApi::new(false);
        let result = submit_with(
            &api,
            "ab",
            "short",
            TicketPriority::Medium,
            OutputOptions::default(),
        )
        .await;
        assert!(matches!(result, Err(DeskError::Validation(_))));
        assert!(api.received.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_submit_failure_uses_fixed_message() {
        let api = FakeApi::new(true);
        let err = submit_with(
            &api,
            "Printer",
            "The printer is out of toner",
            TicketPriority::High,
            OutputOptions::default(),
        )
        .await
        .unwrap_err();
        assert_eq!(err.to_string(), SUBMIT_ERROR_MESSAGE);
    }
}
