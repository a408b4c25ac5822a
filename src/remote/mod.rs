//! Ticket backend client.
//!
//! This module is the only place that performs I/O against the ticket
//! backend. Views talk to it through the [`TicketApi`] trait so they can be
//! exercised against an in-memory implementation.

pub mod error;
pub mod http;

use std::future::Future;

use crate::error::Result;
use crate::types::{NewTicket, Ticket, TicketId};

pub use http::HttpTicketClient;

/// Path of the ticket collection, relative to the backend base URL
pub const TICKETS_PATH: &str = "api/tickets";

/// Common interface for ticket backends
pub trait TicketApi: Send + Sync {
    /// Create a ticket. The caller is responsible for validating it first.
    fn create_ticket(&self, ticket: &NewTicket) -> impl Future<Output = Result<Ticket>> + Send;

    /// Fetch every ticket, in the order the backend returns them
    fn get_all_tickets(&self) -> impl Future<Output = Result<Vec<Ticket>>> + Send;

    /// Fetch a single ticket by its server-assigned id
    fn get_ticket(&self, id: &TicketId) -> impl Future<Output = Result<Ticket>> + Send;
}
