//! Ticket submission view
//!
//! Owns the form field values and the three submission flags. The view is
//! presentation-independent: a presentation layer fills the fields, calls
//! [`SubmitView::submit`] and renders the resulting state.

use crate::error::Result;
use crate::remote::TicketApi;
use crate::types::{NewTicket, Ticket, TicketPriority};

use super::validator::{FormField, FormValues, TicketFormValidator, ValidationResult};

/// Message shown for any failure of the create request
pub const SUBMIT_ERROR_MESSAGE: &str = "Failed to submit ticket. Please try again.";

/// What happened to a submit attempt
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// The form was invalid; nothing was sent
    Invalid(ValidationResult),
    /// The backend accepted the ticket
    Created(Ticket),
    /// The create request failed; `submit_error` holds the user-facing message
    Failed,
}

#[derive(Debug, Clone)]
pub struct SubmitView {
    fields: FormValues,
    pub is_submitting: bool,
    pub submit_success: bool,
    /// User-facing error message, empty when there is none
    pub submit_error: String,
}

impl Default for SubmitView {
    fn default() -> Self {
        Self {
            fields: empty_form(),
            is_submitting: false,
            submit_success: false,
            submit_error: String::new(),
        }
    }
}

fn empty_form() -> FormValues {
    FormValues::from([
        (FormField::Title, String::new()),
        (FormField::Description, String::new()),
        (FormField::Priority, TicketPriority::default().to_string()),
    ])
}

impl SubmitView {
    pub fn new() -> Self {
        Self::default()
    }

    /// Entry point invoked when the view becomes visible. Starts from a blank form.
    pub fn on_shown(&mut self) {
        *self = Self::default();
    }

    pub fn field(&self, field: FormField) -> &str {
        self.fields.get(&field).map(String::as_str).unwrap_or("")
    }

    pub fn fields(&self) -> &FormValues {
        &self.fields
    }

    pub fn set_field(&mut self, field: FormField, value: impl Into<String>) {
        self.fields.insert(field, value.into());
    }

    pub fn set_title(&mut self, title: impl Into<String>) {
        self.set_field(FormField::Title, title);
    }

    pub fn set_description(&mut self, description: impl Into<String>) {
        self.set_field(FormField::Description, description);
    }

    pub fn set_priority(&mut self, priority: TicketPriority) {
        self.set_field(FormField::Priority, priority.to_string());
    }

    /// Field-level validity of the current form
    pub fn validation(&self) -> ValidationResult {
        TicketFormValidator::validate(&self.fields)
    }

    pub fn is_valid(&self) -> bool {
        self.validation().is_valid()
    }

    /// Start a submission.
    ///
    /// Returns the ticket to send, or `None` if the form is invalid, in which
    /// case no state changes. Field values are sent as entered.
    pub fn begin_submit(&mut self) -> Option<NewTicket> {
        if !self.is_valid() {
            return None;
        }

        self.is_submitting = true;
        self.submit_error.clear();
        self.submit_success = false;

        // Validation guarantees the priority parses
        let priority = self
            .field(FormField::Priority)
            .parse::<TicketPriority>()
            .unwrap_or_default();

        Some(NewTicket::new(
            self.field(FormField::Title),
            self.field(FormField::Description),
            priority,
        ))
    }

    /// Apply the result of the create request
    pub fn finish_submit(&mut self, result: &Result<Ticket>) {
        self.is_submitting = false;
        match result {
            Ok(created) => {
                tracing::info!(id = ?created.id, "ticket submitted");
                self.submit_success = true;
                self.fields = empty_form();
            }
            Err(e) => {
                tracing::error!("Error submitting ticket: {e}");
                self.submit_error = SUBMIT_ERROR_MESSAGE.to_string();
            }
        }
    }

    /// Validate, send and apply the result in one go
    pub async fn submit<A: TicketApi>(&mut self, api: &A) -> SubmitOutcome {
        let Some(ticket) = self.begin_submit() else {
            return SubmitOutcome::Invalid(self.validation());
        };

        let result = api.create_ticket(&ticket).await;
        self.finish_submit(&result);

        match result {
            Ok(created) => SubmitOutcome::Created(created),
            Err(_) => SubmitOutcome::Failed,
        }
    }
}
