use std::sync::Mutex;

use ticketdesk::error::{DeskError, Result};
use ticketdesk::remote::TicketApi;
use ticketdesk::types::{NewTicket, Ticket, TicketId, TicketPriority, TicketStatus};
use ticketdesk::views::list::LOAD_ERROR_MESSAGE;
use ticketdesk::views::submit::SUBMIT_ERROR_MESSAGE;
use ticketdesk::views::{FormField, ListView, SubmitOutcome, SubmitView, priority_class};

/// In-memory backend that records what it receives and answers from a script
struct ScriptedApi {
    create_fails: bool,
    list: Option<Vec<Ticket>>,
    created: Mutex<Vec<NewTicket>>,
    list_calls: Mutex<usize>,
}

impl ScriptedApi {
    fn accepting() -> Self {
        Self {
            create_fails: false,
            list: Some(Vec::new()),
            created: Mutex::new(Vec::new()),
            list_calls: Mutex::new(0),
        }
    }

    fn failing() -> Self {
        Self {
            create_fails: true,
            list: None,
            ..Self::accepting()
        }
    }

    fn listing(tickets: Vec<Ticket>) -> Self {
        Self {
            list: Some(tickets),
            ..Self::accepting()
        }
    }

    fn created(&self) -> Vec<NewTicket> {
        self.created.lock().unwrap().clone()
    }
}

impl TicketApi for ScriptedApi {
    async fn create_ticket(&self, ticket: &NewTicket) -> Result<Ticket> {
        self.created.lock().unwrap().push(ticket.clone());
        if self.create_fails {
            return Err(DeskError::Other("connection reset".to_string()));
        }
        let mut saved = Ticket::from(ticket.clone());
        saved.id = Some(TicketId::Number(42));
        saved.created_at = Some("2024-05-01T10:00:00".to_string());
        Ok(saved)
    }

    async fn get_all_tickets(&self) -> Result<Vec<Ticket>> {
        *self.list_calls.lock().unwrap() += 1;
        self.list
            .clone()
            .ok_or_else(|| DeskError::Other("service unavailable".to_string()))
    }

    async fn get_ticket(&self, id: &TicketId) -> Result<Ticket> {
        Err(DeskError::Other(format!("ticket {id} not found")))
    }
}

fn filled_view(title: &str, description: &str, priority: TicketPriority) -> SubmitView {
    let mut view = SubmitView::new();
    view.on_shown();
    view.set_title(title);
    view.set_description(description);
    view.set_priority(priority);
    view
}

// ============================================================================
// Submission view
// ============================================================================

#[tokio::test]
async fn test_submit_sends_open_ticket_and_resets_form() {
    let api = ScriptedApi::accepting();
    let mut view = filled_view("Bug", "Something is broken", TicketPriority::High);

    let outcome = view.submit(&api).await;
    assert!(matches!(outcome, SubmitOutcome::Created(_)));

    let sent = api.created();
    assert_eq!(sent.len(), 1);
    assert_eq!(sent[0].title, "Bug");
    assert_eq!(sent[0].description, "Something is broken");
    assert_eq!(sent[0].priority, TicketPriority::High);
    assert_eq!(sent[0].status, TicketStatus::Open);

    assert!(view.submit_success);
    assert!(!view.is_submitting);
    assert!(view.submit_error.is_empty());
    assert_eq!(view.field(FormField::Title), "");
    assert_eq!(view.field(FormField::Description), "");
    assert_eq!(view.field(FormField::Priority), "Medium");
}

#[tokio::test]
async fn test_submit_with_short_title_never_calls_backend() {
    let api = ScriptedApi::accepting();
    let mut view = filled_view("ab", "Something is broken", TicketPriority::Low);

    let outcome = view.submit(&api).await;
    match outcome {
        SubmitOutcome::Invalid(validation) => {
            assert!(validation.failing_fields().contains(&FormField::Title));
            assert!(!validation.failing_fields().contains(&FormField::Description));
        }
        other => panic!("expected invalid outcome, got {other:?}"),
    }

    assert!(api.created().is_empty());
    assert!(!view.submit_success);
    assert!(view.submit_error.is_empty());
    assert!(!view.is_submitting);
    assert_eq!(view.field(FormField::Title), "ab");
}

#[tokio::test]
async fn test_submit_failure_keeps_fields() {
    let api = ScriptedApi::failing();
    let mut view = filled_view("Laptop", "Screen flickers constantly", TicketPriority::Critical);

    let outcome = view.submit(&api).await;
    assert_eq!(outcome, SubmitOutcome::Failed);

    assert_eq!(view.submit_error, SUBMIT_ERROR_MESSAGE);
    assert!(!view.is_submitting);
    assert!(!view.submit_success);
    assert_eq!(view.field(FormField::Title), "Laptop");
    assert_eq!(view.field(FormField::Description), "Screen flickers constantly");
    assert_eq!(view.field(FormField::Priority), "Critical");
}

#[tokio::test]
async fn test_retry_after_failure_clears_error() {
    let failing = ScriptedApi::failing();
    let mut view = filled_view("Laptop", "Screen flickers constantly", TicketPriority::High);
    view.submit(&failing).await;
    assert_eq!(view.submit_error, SUBMIT_ERROR_MESSAGE);

    let ok = ScriptedApi::accepting();
    view.submit(&ok).await;
    assert!(view.submit_error.is_empty());
    assert!(view.submit_success);
}

#[tokio::test]
async fn test_submit_sends_values_as_entered() {
    let api = ScriptedApi::accepting();
    let mut view = filled_view(" ab", " 123456789", TicketPriority::Low);

    let outcome = view.submit(&api).await;
    assert!(matches!(outcome, SubmitOutcome::Created(_)));

    let sent = api.created();
    assert_eq!(sent[0].title, " ab");
    assert_eq!(sent[0].description, " 123456789");
}

#[tokio::test]
async fn test_submit_whitespace_only_title_is_rejected() {
    let api = ScriptedApi::accepting();
    let mut view = filled_view("     ", "Something is broken", TicketPriority::Low);

    let outcome = view.submit(&api).await;
    assert!(matches!(outcome, SubmitOutcome::Invalid(_)));
    assert!(api.created().is_empty());
}

#[test]
fn test_on_shown_resets_previous_state() {
    let mut view = filled_view("Bug", "Something is broken", TicketPriority::High);
    view.submit_success = true;
    view.on_shown();
    assert!(!view.submit_success);
    assert_eq!(view.field(FormField::Title), "");
    assert_eq!(view.field(FormField::Priority), "Medium");
}

// ============================================================================
// Listing view
// ============================================================================

#[tokio::test]
async fn test_list_empty_array() {
    let api = ScriptedApi::accepting();
    let mut view = ListView::new();

    view.on_shown(&api).await;
    assert!(view.tickets.is_empty());
    assert!(!view.loading);
    assert_eq!(view.error, "");
}

#[tokio::test]
async fn test_list_failure_keeps_previous_tickets() {
    let mut view = ListView::new();
    let previous = Ticket::from(NewTicket::new("Printer", "Out of toner again", TicketPriority::Low));

    view.on_shown(&ScriptedApi::listing(vec![previous.clone()])).await;
    assert_eq!(view.tickets, vec![previous.clone()]);

    view.load(&ScriptedApi::failing()).await;
    assert_eq!(view.error, LOAD_ERROR_MESSAGE);
    assert_eq!(view.tickets, vec![previous]);
    assert!(!view.loading);
}

#[tokio::test]
async fn test_list_preserves_backend_order() {
    let tickets = vec![
        Ticket::from(NewTicket::new("Third", "Created most recently", TicketPriority::Low)),
        Ticket::from(NewTicket::new("First", "Created long ago", TicketPriority::High)),
    ];
    let api = ScriptedApi::listing(tickets.clone());
    let mut view = ListView::new();

    view.on_shown(&api).await;
    assert_eq!(view.tickets, tickets);
    assert_eq!(*api.list_calls.lock().unwrap(), 1);
}

#[test]
fn test_unknown_priority_class_matches_medium() {
    assert_eq!(priority_class("Unknown"), priority_class("Medium"));
}
