//! a2a-courier: resolve A2A agent cards and send messages to agents.
//!
//! Fetches an agent's public card, upgrades to the authenticated extended
//! card when the agent offers one, and talks to the agent's JSON-RPC endpoint
//! with single-response and streaming sends.
//!
//! # Quick Start
//!
//! ```no_run
//! use a2a_courier::prelude::*;
//! use futures::StreamExt;
//!
//! # async fn example() -> a2a_courier::error::Result<()> {
//! let config = CourierConfig::default();
//! let http = config.http_client()?;
//! let resolver = config.resolver(http.clone());
//! let selection = select_agent_card(&resolver, &config.extended_card_request()).await?;
//! let client = A2aClient::new(http, selection.into_card())?;
//!
//! let params = MessageSendParams::new(Message::user_text("how much is 10 USD in INR?"));
//! let response = client.send_message(SendMessageRequest::new(params.clone())).await?;
//! println!("{}", serde_json::to_string(&response)?);
//!
//! let mut chunks = client.send_message_streaming(SendStreamingMessageRequest::new(params))?;
//! while let Some(chunk) = chunks.next().await {
//!     println!("{}", serde_json::to_string(&chunk?)?);
//! }
//! # Ok(())
//! # }
//! ```

pub mod card;
pub mod client;
pub mod config;
pub mod error;
pub mod prelude;
pub mod protocol;
pub mod runner;
pub mod transport;
pub mod types;

#[cfg(feature = "cli")]
pub mod cli;
