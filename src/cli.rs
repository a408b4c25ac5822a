use clap::{Parser, Subcommand};
use clap_complete::Shell;

use crate::types::{TicketPriority, VALID_PRIORITIES};

#[derive(Parser)]
#[command(name = "ticketdesk")]
#[command(about = "Submit and browse support tickets")]
#[command(version)]
pub struct Cli {
    /// Output as JSON
    #[arg(long, global = true)]
    pub json: bool,

    #[command(subcommand)]
    pub command: Commands,
}

impl Cli {
    pub fn output_options(&self) -> OutputOptions {
        OutputOptions { json: self.json }
    }
}

/// How command results are printed
#[derive(Debug, Clone, Copy, Default)]
pub struct OutputOptions {
    pub json: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Resolve a path (e.g. "/tickets") and show its view
    Open {
        /// Path to open; empty redirects to the submission view
        #[arg(default_value = "")]
        path: String,
    },

    /// Submit a new ticket
    #[command(visible_alias = "s")]
    Submit {
        /// Ticket title (at least 3 characters)
        #[arg(short, long)]
        title: String,

        /// Description text (at least 10 characters)
        #[arg(short, long)]
        description: String,

        /// Priority: Low, Medium, High, Critical
        #[arg(short, long, default_value = "Medium", value_parser = parse_priority)]
        priority: TicketPriority,
    },

    /// List all tickets
    #[command(visible_alias = "ls")]
    Tickets {
        /// Render as a table instead of one line per ticket
        #[arg(long)]
        table: bool,
    },

    /// Display a single ticket
    Show {
        /// Ticket ID
        id: String,
    },

    /// Manage configuration
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        shell: Shell,
    },
}

#[derive(Subcommand)]
pub enum ConfigAction {
    /// Show effective configuration
    Show,

    /// Set a configuration value
    Set {
        /// Key: backend.url or backend.timeout
        key: String,

        /// Value to store
        value: String,
    },

    /// Print one configuration value
    Get {
        /// Key: backend.url or backend.timeout
        key: String,
    },
}

fn parse_priority(s: &str) -> Result<TicketPriority, String> {
    s.parse().map_err(|_| {
        format!(
            "invalid priority '{s}', expected one of: {}",
            VALID_PRIORITIES.join(", ")
        )
    })
}
