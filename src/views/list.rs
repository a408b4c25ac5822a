//! Ticket listing view
//!
//! Holds the fetched tickets plus `loading` / `error` flags, and the pure
//! functions deriving display class tags from priority and status values.

use crate::error::Result;
use crate::remote::TicketApi;
use crate::types::Ticket;

/// Message shown for any failure of the list request
pub const LOAD_ERROR_MESSAGE: &str = "Failed to load tickets";

pub const PRIORITY_CRITICAL_CLASS: &str = "priority-critical";
pub const PRIORITY_HIGH_CLASS: &str = "priority-high";
pub const PRIORITY_MEDIUM_CLASS: &str = "priority-medium";
pub const PRIORITY_LOW_CLASS: &str = "priority-low";

pub const STATUS_OPEN_CLASS: &str = "status-open";
pub const STATUS_PROGRESS_CLASS: &str = "status-progress";
pub const STATUS_CLOSED_CLASS: &str = "status-closed";

/// Class tag for a priority value. Unknown values fall back to the medium tag.
pub fn priority_class(priority: &str) -> &'static str {
    if unicase::eq(priority, "critical") {
        PRIORITY_CRITICAL_CLASS
    } else if unicase::eq(priority, "high") {
        PRIORITY_HIGH_CLASS
    } else if unicase::eq(priority, "low") {
        PRIORITY_LOW_CLASS
    } else {
        PRIORITY_MEDIUM_CLASS
    }
}

/// Class tag for a status value. Unknown values fall back to the open tag.
pub fn status_class(status: &str) -> &'static str {
    if unicase::eq(status, "in-progress") {
        STATUS_PROGRESS_CLASS
    } else if unicase::eq(status, "closed") {
        STATUS_CLOSED_CLASS
    } else {
        STATUS_OPEN_CLASS
    }
}

/// Identifies one issued load so its response can be matched to it
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoadToken(u64);

#[derive(Debug, Clone, Default)]
pub struct ListView {
    pub tickets: Vec<Ticket>,
    pub loading: bool,
    /// User-facing error message, empty when there is none
    pub error: String,
    /// Generation of the most recently issued load
    latest: u64,
}

impl ListView {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a load: mark the view as loading and hand out a token for the response
    pub fn begin_load(&mut self) -> LoadToken {
        self.latest += 1;
        self.loading = true;
        self.error.clear();
        LoadToken(self.latest)
    }

    /// Apply a list response.
    ///
    /// Responses to anything but the latest issued load are dropped so an
    /// older, slower request cannot overwrite newer data. Returns whether the
    /// response was applied.
    pub fn finish_load(&mut self, token: LoadToken, result: Result<Vec<Ticket>>) -> bool {
        if token.0 != self.latest {
            tracing::debug!(
                load = token.0,
                latest = self.latest,
                "discarding stale ticket list response"
            );
            return false;
        }

        self.loading = false;
        match result {
            Ok(tickets) => {
                self.tickets = tickets;
            }
            Err(e) => {
                tracing::error!("Error loading tickets: {e}");
                self.error = LOAD_ERROR_MESSAGE.to_string();
            }
        }
        true
    }

    /// Fetch the ticket list and apply it
    pub async fn load<A: TicketApi>(&mut self, api: &A) {
        let token = self.begin_load();
        let result = api.get_all_tickets().await;
        self.finish_load(token, result);
    }

    /// Entry point invoked when the view becomes visible
    pub async fn on_shown<A: TicketApi>(&mut self, api: &A) {
        self.load(api).await;
    }
}
