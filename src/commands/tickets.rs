use serde_json::json;

use super::{CommandOutput, backend_client};
use crate::cli::OutputOptions;
use crate::display::{format_ticket_detail, format_ticket_line, format_ticket_table, ticket_to_json};
use crate::error::{DeskError, Result};
use crate::remote::TicketApi;
use crate::types::TicketId;
use crate::views::ListView;

/// Show the listing view and print whatever it loaded
pub async fn cmd_tickets(table: bool, output: OutputOptions) -> Result<()> {
    let client = backend_client()?;
    list_with(&client, table, output).await
}

pub(crate) async fn list_with<A: TicketApi>(
    api: &A,
    table: bool,
    output: OutputOptions,
) -> Result<()> {
    let mut view = ListView::new();
    view.on_shown(api).await;

    if !view.error.is_empty() {
        return Err(DeskError::Other(view.error));
    }

    let json_tickets: Vec<_> = view.tickets.iter().map(ticket_to_json).collect();

    let text = if view.tickets.is_empty() {
        "No tickets found".to_string()
    } else if table {
        format_ticket_table(&view.tickets)
    } else {
        view.tickets
            .iter()
            .map(format_ticket_line)
            .collect::<Vec<_>>()
            .join("\n")
    };

    CommandOutput::new(json!({
        "count": view.tickets.len(),
        "tickets": json_tickets,
    }))
    .with_text(text)
    .print(output)
}

/// Fetch and display one ticket
pub async fn cmd_show(id: &str, output: OutputOptions) -> Result<()> {
    let id = id.trim();
    if id.is_empty() {
        return Err(DeskError::Other("ticket id cannot be empty".to_string()));
    }

    let client = backend_client()?;
    let ticket = client.get_ticket(&TicketId::from(id)).await?;

    CommandOutput::new(ticket_to_json(&ticket))
        .with_text(format_ticket_detail(&ticket))
        .print(output)
}
