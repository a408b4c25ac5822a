use owo_colors::OwoColorize;

use crate::views::list::{
    PRIORITY_CRITICAL_CLASS, PRIORITY_HIGH_CLASS, PRIORITY_LOW_CLASS, STATUS_CLOSED_CLASS,
    STATUS_PROGRESS_CLASS, priority_class, status_class,
};

pub mod formatters;

pub use formatters::*;

/// Colour a priority badge according to its class tag
pub fn format_priority_colored(priority: &str) -> String {
    let badge = format!("[{}]", label_or_dash(priority));
    match priority_class(priority) {
        PRIORITY_CRITICAL_CLASS => badge.red().bold().to_string(),
        PRIORITY_HIGH_CLASS => badge.red().to_string(),
        PRIORITY_LOW_CLASS => badge.dimmed().to_string(),
        _ => badge.yellow().to_string(),
    }
}

/// Colour a status badge according to its class tag
pub fn format_status_colored(status: &str) -> String {
    let badge = format!("[{}]", label_or_dash(status));
    match status_class(status) {
        STATUS_PROGRESS_CLASS => badge.cyan().to_string(),
        STATUS_CLOSED_CLASS => badge.green().to_string(),
        _ => badge.magenta().to_string(),
    }
}
