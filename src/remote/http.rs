//! reqwest-backed implementation of [`TicketApi`].

use reqwest::Client;
use reqwest::header;
use url::Url;

use crate::config::Config;
use crate::error::{DeskError, Result};
use crate::types::{NewTicket, Ticket, TicketId};

use super::error::error_from_response;
use super::{TICKETS_PATH, TicketApi};

/// HTTP client for the ticket backend
#[derive(Debug, Clone)]
pub struct HttpTicketClient {
    client: Client,
    /// `{base}/api/tickets`
    tickets_url: Url,
}

impl HttpTicketClient {
    /// Create a client from configuration.
    ///
    /// No timeout is applied unless `backend.timeout` is set.
    pub fn from_config(config: &Config) -> Result<Self> {
        let base_url = config.backend_url()?;

        let mut builder = Client::builder().user_agent(concat!(
            env!("CARGO_PKG_NAME"),
            "/",
            env!("CARGO_PKG_VERSION")
        ));
        if let Some(timeout) = config.timeout() {
            builder = builder.timeout(timeout);
        }

        Self::with_client(builder.build()?, base_url)
    }

    /// Create a client for the given base URL with default HTTP settings
    pub fn new(base_url: Url) -> Result<Self> {
        Self::with_client(Client::new(), base_url)
    }

    fn with_client(client: Client, mut base_url: Url) -> Result<Self> {
        // Url::join drops the last path segment unless the base ends with a slash
        if !base_url.path().ends_with('/') {
            let path = format!("{}/", base_url.path());
            base_url.set_path(&path);
        }

        let tickets_url = base_url
            .join(TICKETS_PATH)
            .map_err(|e| DeskError::InvalidUrl(base_url.to_string(), e))?;

        Ok(Self {
            client,
            tickets_url,
        })
    }

    /// URL of the ticket collection
    pub fn tickets_url(&self) -> &Url {
        &self.tickets_url
    }

    fn ticket_url(&self, id: &TicketId) -> Result<Url> {
        let mut url = self.tickets_url.clone();
        url.path_segments_mut()
            .map_err(|_| {
                DeskError::Config(format!("backend URL '{}' cannot be a base", self.tickets_url))
            })?
            .push(&id.to_string());
        Ok(url)
    }

    async fn check(response: reqwest::Response) -> Result<reqwest::Response> {
        if response.status().is_success() {
            Ok(response)
        } else {
            Err(error_from_response(response).await)
        }
    }
}

impl TicketApi for HttpTicketClient {
    async fn create_ticket(&self, ticket: &NewTicket) -> Result<Ticket> {
        tracing::debug!(url = %self.tickets_url, title = %ticket.title, "creating ticket");

        let response = self
            .client
            .post(self.tickets_url.clone())
            .header(header::ACCEPT, "application/json")
            .json(ticket)
            .send()
            .await?;

        let created = Self::check(response).await?.json::<Ticket>().await?;
        tracing::debug!(id = ?created.id, "ticket created");
        Ok(created)
    }

    async fn get_all_tickets(&self) -> Result<Vec<Ticket>> {
        tracing::debug!(url = %self.tickets_url, "fetching tickets");

        let response = self
            .client
            .get(self.tickets_url.clone())
            .header(header::ACCEPT, "application/json")
            .send()
            .await?;

        let tickets = Self::check(response).await?.json::<Vec<Ticket>>().await?;
        tracing::debug!(count = tickets.len(), "tickets fetched");
        Ok(tickets)
    }

    async fn get_ticket(&self, id: &TicketId) -> Result<Ticket> {
        let url = self.ticket_url(id)?;
        tracing::debug!(url = %url, "fetching ticket");

        let response = self
            .client
            .get(url)
            .header(header::ACCEPT, "application/json")
            .send()
            .await?;

        Ok(Self::check(response).await?.json::<Ticket>().await?)
    }
}
