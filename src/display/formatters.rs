use jiff::Timestamp;
use jiff::civil::DateTime;
use owo_colors::OwoColorize;
use tabled::settings::Style;
use tabled::{Table, Tabled};

use crate::types::Ticket;
use crate::views::{priority_class, status_class};

use super::{format_priority_colored, format_status_colored};

/// Format a backend timestamp for display.
///
/// Accepts RFC 3339 instants and zone-less civil datetimes (what a Java
/// `LocalDateTime` serializes to). Anything else is shown as-is.
pub fn format_created_at(raw: &str) -> String {
    if let Ok(ts) = raw.parse::<Timestamp>() {
        return ts.strftime("%Y-%m-%d %H:%M").to_string();
    }
    if let Ok(dt) = raw.parse::<DateTime>() {
        return dt.strftime("%Y-%m-%d %H:%M").to_string();
    }
    raw.to_string()
}

fn id_or_placeholder(ticket: &Ticket) -> String {
    ticket
        .id
        .as_ref()
        .map(|id| id.to_string())
        .unwrap_or_else(|| "-".to_string())
}

/// Placeholder for values the backend left empty
pub(crate) fn label_or_dash(value: &str) -> &str {
    if value.trim().is_empty() {
        "-"
    } else {
        value
    }
}

/// Format a ticket for single-line display with colors
pub fn format_ticket_line(ticket: &Ticket) -> String {
    let id_padded = format!("{:6}", id_or_placeholder(ticket));
    let created = ticket
        .created_at
        .as_deref()
        .map(|c| format!(" ({})", format_created_at(c)).dimmed().to_string())
        .unwrap_or_default();

    format!(
        "{} {}{} - {}{}",
        id_padded.cyan(),
        format_priority_colored(&ticket.priority),
        format_status_colored(&ticket.status),
        ticket.title,
        created
    )
}

/// Format a ticket with all of its fields (for the show command)
pub fn format_ticket_detail(ticket: &Ticket) -> String {
    let mut out = String::new();
    out.push_str(&format!("{}\n", ticket.title.bold()));
    out.push_str(&format!("{}: {}\n", "id".cyan(), id_or_placeholder(ticket)));
    out.push_str(&format!(
        "{}: {}\n",
        "priority".cyan(),
        format_priority_colored(&ticket.priority)
    ));
    out.push_str(&format!(
        "{}: {}\n",
        "status".cyan(),
        format_status_colored(&ticket.status)
    ));
    if let Some(created) = ticket.created_at.as_deref() {
        out.push_str(&format!("{}: {}\n", "created".cyan(), format_created_at(created)));
    }
    if let Some(by) = ticket.created_by.as_deref() {
        out.push_str(&format!("{}: {}\n", "created by".cyan(), by));
    }
    out.push('\n');
    out.push_str(&ticket.description);
    out
}

#[derive(Tabled)]
struct TicketRow {
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "Title")]
    title: String,
    #[tabled(rename = "Priority")]
    priority: String,
    #[tabled(rename = "Status")]
    status: String,
    #[tabled(rename = "Created")]
    created: String,
}

/// Render tickets as a plain table
pub fn format_ticket_table(tickets: &[Ticket]) -> String {
    let rows: Vec<TicketRow> = tickets
        .iter()
        .map(|t| TicketRow {
            id: id_or_placeholder(t),
            title: t.title.clone(),
            priority: label_or_dash(&t.priority).to_string(),
            status: label_or_dash(&t.status).to_string(),
            created: t
                .created_at
                .as_deref()
                .map(format_created_at)
                .unwrap_or_default(),
        })
        .collect();

    let mut table = Table::new(rows);
    table.with(Style::modern());
    table.to_string()
}

/// JSON representation of a ticket including its display class tags
pub fn ticket_to_json(ticket: &Ticket) -> serde_json::Value {
    serde_json::json!({
        "id": ticket.id,
        "title": ticket.title,
        "description": ticket.description,
        "priority": ticket.priority,
        "status": ticket.status,
        "createdAt": ticket.created_at,
        "createdBy": ticket.created_by,
        "priorityClass": priority_class(&ticket.priority),
        "statusClass": status_class(&ticket.status),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::TicketId;

    fn sample() -> Ticket {
        Ticket {
            id: Some(TicketId::Number(7)),
            title: "Printer jam".to_string(),
            description: "Tray two keeps jamming".to_string(),
            priority: "Critical".to_string(),
            status: "In-Progress".to_string(),
            created_at: Some("2024-03-01T09:30:00".to_string()),
            created_by: None,
        }
    }

    #[test]
    fn test_format_created_at_civil() {
        assert_eq!(format_created_at("2024-03-01T09:30:00"), "2024-03-01 09:30");
        assert_eq!(format_created_at("2024-03-01T09:30:00.123456"), "2024-03-01 09:30");
    }

    #[test]
    fn test_format_created_at_timestamp() {
        assert_eq!(format_created_at("2024-03-01T09:30:00Z"), "2024-03-01 09:30");
    }

    #[test]
    fn test_format_created_at_passthrough() {
        assert_eq!(format_created_at("yesterday"), "yesterday");
    }

    #[test]
    fn test_ticket_line_contains_fields() {
        let line = format_ticket_line(&sample());
        assert!(line.contains('7'));
        assert!(line.contains("Critical"));
        assert!(line.contains("In-Progress"));
        assert!(line.contains("Printer jam"));
        assert!(line.contains("2024-03-01 09:30"));
    }

    #[test]
    fn test_ticket_table_headers() {
        let table = format_ticket_table(&[sample()]);
        assert!(table.contains("ID"));
        assert!(table.contains("Priority"));
        assert!(table.contains("Printer jam"));
    }

    #[test]
    fn test_ticket_json_has_classes() {
        let json = ticket_to_json(&sample());
        assert_eq!(json["priorityClass"], "priority-critical");
        assert_eq!(json["statusClass"], "status-progress");
        assert_eq!(json["id"], 7);
        assert_eq!(json["status"], "In-Progress");
    }

    #[test]
    fn test_unknown_values_render_with_fallback_classes() {
        let mut ticket = sample();
        ticket.priority = "Urgent".to_string();
        ticket.status = String::new();

        let json = ticket_to_json(&ticket);
        assert_eq!(json["priorityClass"], "priority-medium");
        assert_eq!(json["statusClass"], "status-open");

        let line = format_ticket_line(&ticket);
        assert!(line.contains("[Urgent]"));
        assert!(line.contains("[-]"));
    }
}
