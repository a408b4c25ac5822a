use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::DeskError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(try_from = "String", into = "String")]
pub enum TicketPriority {
    Low,
    #[default]
    Medium,
    High,
    Critical,
}

impl TicketPriority {
    pub const ALL: [TicketPriority; 4] = [
        TicketPriority::Low,
        TicketPriority::Medium,
        TicketPriority::High,
        TicketPriority::Critical,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            TicketPriority::Low => "Low",
            TicketPriority::Medium => "Medium",
            TicketPriority::High => "High",
            TicketPriority::Critical => "Critical",
        }
    }
}

impl fmt::Display for TicketPriority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TicketPriority {
    type Err = DeskError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "low" => Ok(TicketPriority::Low),
            "medium" => Ok(TicketPriority::Medium),
            "high" => Ok(TicketPriority::High),
            "critical" => Ok(TicketPriority::Critical),
            _ => Err(DeskError::InvalidPriority(s.to_string())),
        }
    }
}

impl TryFrom<String> for TicketPriority {
    type Error = DeskError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<TicketPriority> for String {
    fn from(priority: TicketPriority) -> Self {
        priority.as_str().to_string()
    }
}

pub const VALID_PRIORITIES: &[&str] = &["Low", "Medium", "High", "Critical"];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(try_from = "String", into = "String")]
pub enum TicketStatus {
    #[default]
    Open,
    InProgress,
    Closed,
}

impl TicketStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            TicketStatus::Open => "Open",
            TicketStatus::InProgress => "In-Progress",
            TicketStatus::Closed => "Closed",
        }
    }
}

impl fmt::Display for TicketStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TicketStatus {
    type Err = DeskError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "open" => Ok(TicketStatus::Open),
            "in-progress" | "in_progress" | "in progress" => Ok(TicketStatus::InProgress),
            "closed" => Ok(TicketStatus::Closed),
            _ => Err(DeskError::InvalidStatus(s.to_string())),
        }
    }
}

impl TryFrom<String> for TicketStatus {
    type Error = DeskError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<TicketStatus> for String {
    fn from(status: TicketStatus) -> Self {
        status.as_str().to_string()
    }
}

pub const VALID_STATUSES: &[&str] = &["Open", "In-Progress", "Closed"];

/// Server-assigned ticket identifier.
///
/// Opaque to the client: the backend may hand out numeric or string ids.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum TicketId {
    Number(i64),
    Text(String),
}

impl fmt::Display for TicketId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TicketId::Number(n) => write!(f, "{}", n),
            TicketId::Text(s) => write!(f, "{}", s),
        }
    }
}

impl From<&str> for TicketId {
    fn from(s: &str) -> Self {
        // Only canonical integers become numbers so "007" or "+7" keep their spelling
        match s.parse::<i64>() {
            Ok(n) if n.to_string() == s => TicketId::Number(n),
            _ => TicketId::Text(s.to_string()),
        }
    }
}

/// Payload sent to create a ticket. Priority and status are checked locally.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NewTicket {
    pub title: String,
    pub description: String,
    pub priority: TicketPriority,
    pub status: TicketStatus,
}

impl NewTicket {
    /// New tickets always start out open.
    pub fn new(
        title: impl Into<String>,
        description: impl Into<String>,
        priority: TicketPriority,
    ) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            priority,
            status: TicketStatus::Open,
        }
    }
}

/// A ticket as returned by the backend.
///
/// Priority and status are kept as the backend sent them so rows with values
/// outside the known sets still render. A missing or `null` value becomes an
/// empty string.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Ticket {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<TicketId>,

    #[serde(default, deserialize_with = "null_as_empty")]
    pub title: String,

    #[serde(default, deserialize_with = "null_as_empty")]
    pub description: String,

    #[serde(default, deserialize_with = "null_as_empty")]
    pub priority: String,

    #[serde(default, deserialize_with = "null_as_empty")]
    pub status: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_by: Option<String>,
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

impl Ticket {
    /// Priority parsed into the known set, if it is one of them
    pub fn known_priority(&self) -> Option<TicketPriority> {
        self.priority.parse().ok()
    }

    /// Status parsed into the known set, if it is one of them
    pub fn known_status(&self) -> Option<TicketStatus> {
        self.status.parse().ok()
    }
}

impl From<NewTicket> for Ticket {
    fn from(ticket: NewTicket) -> Self {
        Self {
            id: None,
            title: ticket.title,
            description: ticket.description,
            priority: ticket.priority.to_string(),
            status: ticket.status.to_string(),
            created_at: None,
            created_by: None,
        }
    }
}
