//! The end-to-end flow: resolve a card, build a client, send, then stream.

use std::io::Write;

use futures::StreamExt;
use serde::Serialize;
use tracing::info;

use crate::card::{select_agent_card, CardSource};
use crate::client::A2aClient;
use crate::config::CourierConfig;
use crate::error::Result;
use crate::protocol::{MessageSendParams, SendMessageRequest, SendStreamingMessageRequest};
use crate::types::Message;

/// Message sent when none is given on the command line.
pub const DEFAULT_MESSAGE: &str = "how much is 10 USD in INR?";

/// What a run should do once the client is built.
#[derive(Debug, Clone)]
pub struct RunOptions {
    pub text: String,
    pub send: bool,
    pub stream: bool,
}

impl Default for RunOptions {
    fn default() -> Self {
        Self {
            text: DEFAULT_MESSAGE.to_string(),
            send: true,
            stream: true,
        }
    }
}

/// What a completed run did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunSummary {
    pub card_source: CardSource,
    /// Whether the extended card was advertised but could not be used.
    pub extended_card_failed: bool,
    pub responses: usize,
    pub chunks: usize,
}

/// Run the whole flow, writing one JSON document per line to `out`.
///
/// The HTTP client lives for the duration of this call and is released on
/// every return path.
pub async fn run<W: Write>(
    config: &CourierConfig,
    options: &RunOptions,
    out: &mut W,
) -> Result<RunSummary> {
    config.validate()?;
    let http = config.http_client()?;
    let resolver = config.resolver(http.clone());

    let selection = select_agent_card(&resolver, &config.extended_card_request()).await?;
    let card_source = selection.source;
    let extended_card_failed = selection.extended_failure.is_some();

    let client = A2aClient::new(http, selection.into_card())?;
    info!(url = client.url(), source = %card_source, "A2A client initialized");

    let params = MessageSendParams::new(Message::user_text(options.text.clone()));
    let mut summary = RunSummary {
        card_source,
        extended_card_failed,
        responses: 0,
        chunks: 0,
    };

    if options.send {
        let request = SendMessageRequest::new(params.clone());
        let response = client.send_message(request).await?;
        print_json(out, &response)?;
        summary.responses += 1;
    }

    if options.stream {
        let request = SendStreamingMessageRequest::new(params);
        let mut chunks = client.send_message_streaming(request)?;
        while let Some(chunk) = chunks.next().await {
            print_json(out, &chunk?)?;
            summary.chunks += 1;
        }
    }

    Ok(summary)
}

fn print_json<W: Write, T: Serialize>(out: &mut W, value: &T) -> Result<()> {
    serde_json::to_writer(&mut *out, value)?;
    writeln!(out)?;
    out.flush()?;
    Ok(())
}
