//! Fetches agent cards from an agent's base address.

use async_trait::async_trait;
use reqwest::header::HeaderMap;
use tracing::{debug, info};

use crate::error::{A2aError, Result};
use crate::transport::{join_url, json_accept_headers, status_to_error};
use crate::types::AgentCard;

/// Well-known path of the public agent card.
pub const PUBLIC_AGENT_CARD_PATH: &str = "/.well-known/agent.json";
/// Path of the authenticated extended agent card.
pub const EXTENDED_AGENT_CARD_PATH: &str = "/agent/authenticatedExtendedCard";

/// Anything that can produce agent cards by relative path.
#[async_trait]
pub trait AgentCardSource: Send + Sync {
    /// Base address cards are resolved against.
    fn base_url(&self) -> &str;

    /// Fetch a card. `None` selects the source's default public card path.
    async fn get_agent_card(
        &self,
        relative_card_path: Option<&str>,
        headers: Option<HeaderMap>,
    ) -> Result<AgentCard>;
}

/// HTTP card resolver bound to one agent's base address.
#[derive(Debug, Clone)]
pub struct AgentCardResolver {
    http: reqwest::Client,
    base_url: String,
    agent_card_path: String,
}

impl AgentCardResolver {
    /// Resolver using the well-known public card path.
    pub fn new(http: reqwest::Client, base_url: impl Into<String>) -> Self {
        Self {
            http,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            agent_card_path: PUBLIC_AGENT_CARD_PATH.to_string(),
        }
    }

    /// Override the default public card path.
    pub fn with_agent_card_path(mut self, path: impl Into<String>) -> Self {
        self.agent_card_path = path.into();
        self
    }

    pub fn agent_card_path(&self) -> &str {
        &self.agent_card_path
    }

    /// Absolute URL for a card path.
    pub fn card_url(&self, relative_card_path: Option<&str>) -> String {
        join_url(
            &self.base_url,
            relative_card_path.unwrap_or(&self.agent_card_path),
        )
    }
}

#[async_trait]
impl AgentCardSource for AgentCardResolver {
    fn base_url(&self) -> &str {
        &self.base_url
    }

    async fn get_agent_card(
        &self,
        relative_card_path: Option<&str>,
        headers: Option<HeaderMap>,
    ) -> Result<AgentCard> {
        let url = self.card_url(relative_card_path);
        info!(url = %url, "Fetching agent card");

        let mut request = self.http.get(&url).headers(json_accept_headers());
        if let Some(headers) = headers {
            request = request.headers(headers);
        }

        let resp = request.send().await?;
        let status = resp.status().as_u16();
        let body = resp.text().await?;
        if !(200..300).contains(&status) {
            return Err(status_to_error(status, &url, &body));
        }

        let card: AgentCard = serde_json::from_str(&body).map_err(|e| {
            debug!(url = %url, error = %e, "Agent card body did not decode");
            A2aError::Serialization(e)
        })?;
        debug!(url = %url, name = %card.name, "Agent card resolved");
        Ok(card)
    }
}
