mod config;
mod open;
mod submit;
mod tickets;

pub use config::{cmd_config_get, cmd_config_set, cmd_config_show};
pub use open::cmd_open;
pub use submit::cmd_submit;
pub use tickets::{cmd_show, cmd_tickets};

use serde_json::Value;

use crate::cli::OutputOptions;
use crate::config::Config;
use crate::error::Result;
use crate::remote::HttpTicketClient;

/// Result of a command, printable as JSON or as text.
///
/// Text defaults to the pretty-printed JSON when no text form was given.
pub struct CommandOutput {
    json: Value,
    text: Option<String>,
}

impl CommandOutput {
    pub fn new(json: Value) -> Self {
        Self { json, text: None }
    }

    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = Some(text.into());
        self
    }

    pub fn print(self, output: OutputOptions) -> Result<()> {
        if output.json {
            return print_json(&self.json);
        }
        match self.text {
            Some(text) => println!("{text}"),
            None => print_json(&self.json)?,
        }
        Ok(())
    }
}

pub fn print_json(value: &Value) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

/// Build a backend client from the on-disk configuration
pub(crate) fn backend_client() -> Result<HttpTicketClient> {
    let config = Config::load()?;
    HttpTicketClient::from_config(&config)
}
