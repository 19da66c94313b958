//! Chooses between the public and the authenticated extended agent card.

use strum::Display;
use tracing::{error, info, warn};

use crate::config::AuthValue;
use crate::error::{A2aError, Result};
use crate::transport::bearer_headers;
use crate::types::AgentCard;

use super::resolver::{AgentCardSource, EXTENDED_AGENT_CARD_PATH};

/// Which card ended up being used.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
#[strum(serialize_all = "lowercase")]
pub enum CardSource {
    Public,
    Extended,
}

/// Where and how to request the extended card.
#[derive(Debug, Clone, PartialEq)]
pub struct ExtendedCardRequest {
    pub path: String,
    pub credential: AuthValue,
}

impl ExtendedCardRequest {
    pub fn new(credential: AuthValue) -> Self {
        Self {
            path: EXTENDED_AGENT_CARD_PATH.to_string(),
            credential,
        }
    }

    pub fn with_path(mut self, path: impl Into<String>) -> Self {
        self.path = path.into();
        self
    }
}

/// Outcome of card selection.
#[derive(Debug)]
pub struct CardSelection {
    pub card: AgentCard,
    pub source: CardSource,
    /// Why the extended card was not used although the public card offered it.
    pub extended_failure: Option<A2aError>,
}

impl CardSelection {
    pub fn is_extended(&self) -> bool {
        self.source == CardSource::Extended
    }

    pub fn into_card(self) -> AgentCard {
        self.card
    }
}

/// Resolve the card a client should be built from.
///
/// The public card is mandatory: failing to obtain it is fatal. The extended
/// card is used only when the public card advertises it and the authenticated
/// fetch succeeds; any failure there is logged and the public card is kept.
pub async fn select_agent_card<S>(
    source: &S,
    extended: &ExtendedCardRequest,
) -> Result<CardSelection>
where
    S: AgentCardSource + ?Sized,
{
    let public_card = match source.get_agent_card(None, None).await {
        Ok(card) => card,
        Err(e) => {
            error!(base_url = source.base_url(), error = %e, "Critical error fetching public agent card");
            return Err(A2aError::PublicCardUnavailable {
                source: Box::new(e),
            });
        }
    };
    info!(card = %pretty(&public_card), "Successfully fetched public agent card");

    if !public_card.supports_authenticated_extended_card() {
        info!("Public card does not indicate support for an extended card. Using public card.");
        return Ok(CardSelection {
            card: public_card,
            source: CardSource::Public,
            extended_failure: None,
        });
    }

    info!(
        base_url = source.base_url(),
        path = %extended.path,
        "Public card supports authenticated extended card. Attempting to fetch it"
    );
    match fetch_extended(source, extended).await {
        Ok(card) => {
            info!(card = %pretty(&card), "Using AUTHENTICATED EXTENDED agent card for client initialization");
            Ok(CardSelection {
                card,
                source: CardSource::Extended,
                extended_failure: None,
            })
        }
        Err(e) => {
            warn!(error = %e, "Failed to fetch extended agent card. Will proceed with public card.");
            Ok(CardSelection {
                card: public_card,
                source: CardSource::Public,
                extended_failure: Some(e),
            })
        }
    }
}

async fn fetch_extended<S>(source: &S, extended: &ExtendedCardRequest) -> Result<AgentCard>
where
    S: AgentCardSource + ?Sized,
{
    let token = extended.credential.resolve()?;
    let headers = bearer_headers(&token)?;
    source
        .get_agent_card(Some(&extended.path), Some(headers))
        .await
}

fn pretty(card: &AgentCard) -> String {
    serde_json::to_string_pretty(card).unwrap_or_else(|_| card.name.clone())
}
