//! JSON-RPC client for a single A2A agent.

mod stream;

use futures::stream::BoxStream;
use reqwest_eventsource::EventSource;
use tracing::{debug, warn};

use crate::error::{A2aError, Result};
use crate::protocol::{
    CancelTaskRequest, CancelTaskResponse, GetTaskPushNotificationConfigRequest,
    GetTaskPushNotificationConfigResponse, GetTaskRequest, GetTaskResponse, JsonRpcResponse,
    RpcRequest, SendMessageRequest, SendMessageResponse, SendStreamingMessageRequest,
    SendStreamingMessageResponse, SetTaskPushNotificationConfigRequest,
    SetTaskPushNotificationConfigResponse, TaskResubscriptionRequest,
};
use crate::transport::{json_accept_headers, status_to_error};
use crate::types::AgentCard;

/// Sends messages to the endpoint named by an agent card.
#[derive(Debug, Clone)]
pub struct A2aClient {
    http: reqwest::Client,
    url: String,
    agent_card: Option<AgentCard>,
}

impl A2aClient {
    /// Create a client for the agent described by `agent_card`.
    pub fn new(http: reqwest::Client, agent_card: AgentCard) -> Result<Self> {
        if agent_card.url.trim().is_empty() {
            return Err(A2aError::InvalidArgument(format!(
                "Agent card '{}' does not declare an endpoint url",
                agent_card.name
            )));
        }
        Ok(Self {
            http,
            url: agent_card.url.clone(),
            agent_card: Some(agent_card),
        })
    }

    /// Create a client for a known endpoint without a card.
    pub fn with_url(http: reqwest::Client, url: impl Into<String>) -> Self {
        Self {
            http,
            url: url.into(),
            agent_card: None,
        }
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    pub fn agent_card(&self) -> Option<&AgentCard> {
        self.agent_card.as_ref()
    }

    /// Send a message and wait for the single response.
    pub async fn send_message(&self, request: SendMessageRequest) -> Result<SendMessageResponse> {
        self.post_rpc(&request).await
    }

    /// Send a message and receive the response as a stream of chunks.
    ///
    /// Nothing is sent until the stream is first polled. Dropping the stream
    /// cancels the request.
    pub fn send_message_streaming(
        &self,
        request: SendStreamingMessageRequest,
    ) -> Result<BoxStream<'static, Result<SendStreamingMessageResponse>>> {
        self.open_stream(&request)
    }

    /// Reattach to the event stream of a task already in progress.
    pub fn resubscribe_task(
        &self,
        request: TaskResubscriptionRequest,
    ) -> Result<BoxStream<'static, Result<SendStreamingMessageResponse>>> {
        self.open_stream(&request)
    }

    /// Fetch the current state of a task.
    pub async fn get_task(&self, request: GetTaskRequest) -> Result<GetTaskResponse> {
        self.post_rpc(&request).await
    }

    /// Ask the agent to cancel a task.
    pub async fn cancel_task(&self, request: CancelTaskRequest) -> Result<CancelTaskResponse> {
        self.post_rpc(&request).await
    }

    /// Register where the agent should push updates for a task.
    ///
    /// Refused locally when the agent card does not declare push notification
    /// support.
    pub async fn set_task_push_notification_config(
        &self,
        request: SetTaskPushNotificationConfigRequest,
    ) -> Result<SetTaskPushNotificationConfigResponse> {
        if let Some(card) = &self.agent_card {
            if !card.supports_push_notifications() {
                return Err(A2aError::InvalidArgument(format!(
                    "Agent '{}' does not support push notifications",
                    card.name
                )));
            }
        }
        self.post_rpc(&request).await
    }

    pub async fn get_task_push_notification_config(
        &self,
        request: GetTaskPushNotificationConfigRequest,
    ) -> Result<GetTaskPushNotificationConfigResponse> {
        self.post_rpc(&request).await
    }

    fn open_stream<R: RpcRequest>(
        &self,
        request: &R,
    ) -> Result<BoxStream<'static, Result<JsonRpcResponse<R::Output>>>> {
        if let Some(card) = &self.agent_card {
            if !card.supports_streaming() {
                warn!(agent = %card.name, method = request.method(), "Agent card does not declare streaming support; sending anyway");
            }
        }
        debug!(url = %self.url, method = request.method(), request_id = %request.id(), "A2A streaming request");

        let builder = self.http.post(&self.url).json(request);
        let source = EventSource::new(builder).map_err(|_| {
            A2aError::Stream("Streaming request body cannot be replayed".to_string())
        })?;
        Ok(stream::rpc_chunks(source, self.url.clone(), request.id().clone()))
    }

    async fn post_rpc<R: RpcRequest>(&self, request: &R) -> Result<JsonRpcResponse<R::Output>> {
        debug!(url = %self.url, method = request.method(), request_id = %request.id(), "A2A request");

        let resp = self
            .http
            .post(&self.url)
            .headers(json_accept_headers())
            .json(request)
            .send()
            .await?;

        let status = resp.status().as_u16();
        let body = resp.text().await?;
        if !(200..300).contains(&status) {
            return Err(status_to_error(status, &self.url, &body));
        }

        let response: JsonRpcResponse<R::Output> = serde_json::from_str(&body)?;
        if response.id.as_ref().is_some_and(|id| id != request.id()) {
            warn!(
                expected = %request.id(),
                actual = ?response.id,
                "Response id does not match request id"
            );
        }
        Ok(response)
    }
}
