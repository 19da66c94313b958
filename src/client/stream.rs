//! Converts a Server-Sent-Events connection into typed JSON-RPC chunks.

use futures::stream::BoxStream;
use futures::StreamExt;
use reqwest_eventsource::{Error as EventSourceError, Event, EventSource};
use serde::de::DeserializeOwned;
use tracing::{debug, warn};

use crate::error::{A2aError, Result};
use crate::protocol::{JsonRpcResponse, RequestId};
use crate::transport::status_to_error;

/// Decode every SSE `data` payload as a response envelope.
///
/// The stream ends when the agent closes the connection or after the first
/// error; the event source is never reconnected.
pub(crate) fn rpc_chunks<T>(
    mut source: EventSource,
    url: String,
    request_id: RequestId,
) -> BoxStream<'static, Result<JsonRpcResponse<T>>>
where
    T: DeserializeOwned + Send + 'static,
{
    source.set_retry_policy(Box::new(reqwest_eventsource::retry::Never));

    let stream = async_stream::stream! {
        let mut chunks = 0usize;
        while let Some(event) = source.next().await {
            match event {
                Ok(Event::Open) => {
                    debug!(url = %url, request_id = %request_id, "Stream opened");
                }
                Ok(Event::Message(message)) => {
                    if message.data.trim().is_empty() {
                        continue;
                    }
                    match serde_json::from_str::<JsonRpcResponse<T>>(&message.data) {
                        Ok(chunk) => {
                            if chunk.id.as_ref().is_some_and(|id| id != &request_id) {
                                warn!(expected = %request_id, "Stream chunk id does not match request id");
                            }
                            chunks += 1;
                            yield Ok(chunk);
                        }
                        Err(e) => {
                            yield Err(A2aError::Serialization(e));
                            break;
                        }
                    }
                }
                Err(EventSourceError::StreamEnded) => {
                    debug!(url = %url, chunks, "Stream ended");
                    break;
                }
                Err(err) => {
                    yield Err(into_error(err, &url).await);
                    break;
                }
            }
        }
        source.close();
    };

    Box::pin(stream)
}

async fn into_error(err: EventSourceError, url: &str) -> A2aError {
    match err {
        EventSourceError::InvalidStatusCode(status, response) => {
            let body = response.text().await.unwrap_or_default();
            status_to_error(status.as_u16(), url, &body)
        }
        EventSourceError::InvalidContentType(content_type, _) => A2aError::Stream(format!(
            "Expected text/event-stream from {url}, got {}",
            content_type.to_str().unwrap_or("<non-ascii>")
        )),
        EventSourceError::Transport(e) => A2aError::Network(e),
        other => A2aError::Stream(other.to_string()),
    }
}
