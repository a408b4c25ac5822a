pub mod cli;
pub mod commands;
pub mod config;
pub mod display;
pub mod error;
pub mod paths;
pub mod remote;
pub mod router;
pub mod types;
pub mod views;

pub use error::{DeskError, Result};
pub use remote::{HttpTicketClient, TicketApi};
pub use types::{NewTicket, Ticket, TicketId, TicketPriority, TicketStatus};
