//! JSON-RPC 2.0 request and response envelopes.

use std::fmt;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use uuid::Uuid;

use crate::error::{A2aError, Result};

use super::params::{MessageSendParams, TaskIdParams, TaskQueryParams};
use crate::types::{SendMessageResult, StreamEvent, Task, TaskPushNotificationConfig};

pub const JSONRPC_VERSION: &str = "2.0";

/// A2A protocol method names.
pub mod methods {
    pub const MESSAGE_SEND: &str = "message/send";
    pub const MESSAGE_STREAM: &str = "message/stream";
    pub const TASKS_GET: &str = "tasks/get";
    pub const TASKS_CANCEL: &str = "tasks/cancel";
    pub const TASKS_RESUBSCRIBE: &str = "tasks/resubscribe";
    pub const TASKS_PUSH_CONFIG_SET: &str = "tasks/pushNotificationConfig/set";
    pub const TASKS_PUSH_CONFIG_GET: &str = "tasks/pushNotificationConfig/get";
}

/// JSON-RPC request id.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RequestId {
    String(String),
    Number(i64),
}

impl RequestId {
    /// Fresh random id.
    pub fn generate() -> Self {
        Self::String(Uuid::new_v4().to_string())
    }
}

impl fmt::Display for RequestId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::String(s) => f.write_str(s),
            Self::Number(n) => write!(f, "{n}"),
        }
    }
}

impl From<String> for RequestId {
    fn from(value: String) -> Self {
        Self::String(value)
    }
}

impl From<&str> for RequestId {
    fn from(value: &str) -> Self {
        Self::String(value.to_string())
    }
}

impl From<i64> for RequestId {
    fn from(value: i64) -> Self {
        Self::Number(value)
    }
}

/// A typed JSON-RPC request that knows its method and result type.
pub trait RpcRequest: Serialize + Send + Sync {
    /// Type of the `result` member on success.
    type Output: DeserializeOwned + Send + 'static;

    fn id(&self) -> &RequestId;
    fn method(&self) -> &str;
}

macro_rules! rpc_request {
    ($(#[$doc:meta])* $name:ident, $params:ty, $method:expr, $output:ty) => {
        $(#[$doc])*
        #[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
        pub struct $name {
            pub jsonrpc: String,
            pub id: RequestId,
            pub method: String,
            pub params: $params,
        }

        impl $name {
            pub const METHOD: &'static str = $method;

            /// Wrap `params` with a freshly generated request id.
            pub fn new(params: $params) -> Self {
                Self::with_id(RequestId::generate(), params)
            }

            pub fn with_id(id: impl Into<RequestId>, params: $params) -> Self {
                Self {
                    jsonrpc: JSONRPC_VERSION.to_string(),
                    id: id.into(),
                    method: $method.to_string(),
                    params,
                }
            }
        }

        impl RpcRequest for $name {
            type Output = $output;

            fn id(&self) -> &RequestId {
                &self.id
            }

            fn method(&self) -> &str {
                &self.method
            }
        }
    };
}

rpc_request!(
    /// Single-response send (`message/send`).
    SendMessageRequest,
    MessageSendParams,
    methods::MESSAGE_SEND,
    SendMessageResult
);

rpc_request!(
    /// Streaming send (`message/stream`); the response arrives as SSE chunks.
    SendStreamingMessageRequest,
    MessageSendParams,
    methods::MESSAGE_STREAM,
    StreamEvent
);

rpc_request!(GetTaskRequest, TaskQueryParams, methods::TASKS_GET, Task);

rpc_request!(CancelTaskRequest, TaskIdParams, methods::TASKS_CANCEL, Task);

rpc_request!(
    /// Reattach to a task's event stream (`tasks/resubscribe`); answered over SSE.
    TaskResubscriptionRequest,
    TaskIdParams,
    methods::TASKS_RESUBSCRIBE,
    StreamEvent
);

rpc_request!(
    SetTaskPushNotificationConfigRequest,
    TaskPushNotificationConfig,
    methods::TASKS_PUSH_CONFIG_SET,
    TaskPushNotificationConfig
);

rpc_request!(
    GetTaskPushNotificationConfigRequest,
    TaskIdParams,
    methods::TASKS_PUSH_CONFIG_GET,
    TaskPushNotificationConfig
);

/// JSON-RPC error object.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JsonRpcError {
    pub code: i64,
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<Value>,
}

impl From<JsonRpcError> for A2aError {
    fn from(error: JsonRpcError) -> Self {
        A2aError::json_rpc(error.code, error.message, error.data)
    }
}

/// JSON-RPC response envelope carrying either `result` or `error`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JsonRpcResponse<T> {
    pub jsonrpc: String,
    #[serde(default)]
    pub id: Option<RequestId>,
    // `default` would add a `T: Default` bound; a missing key decodes as `None` anyway.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub result: Option<T>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<JsonRpcError>,
}

impl<T> JsonRpcResponse<T> {
    pub fn success(id: RequestId, result: T) -> Self {
        Self {
            jsonrpc: JSONRPC_VERSION.to_string(),
            id: Some(id),
            result: Some(result),
            error: None,
        }
    }

    pub fn failure(id: Option<RequestId>, error: JsonRpcError) -> Self {
        Self {
            jsonrpc: JSONRPC_VERSION.to_string(),
            id,
            result: None,
            error: Some(error),
        }
    }

    pub fn is_error(&self) -> bool {
        self.error.is_some()
    }

    /// Unwrap the `result` member, turning an `error` member into [`A2aError::JsonRpc`].
    pub fn into_result(self) -> Result<T> {
        if let Some(error) = self.error {
            return Err(error.into());
        }
        self.result.ok_or_else(|| {
            A2aError::json_rpc(
                -32006,
                "Response carries neither result nor error",
                None,
            )
        })
    }
}

pub type SendMessageResponse = JsonRpcResponse<SendMessageResult>;
pub type SendStreamingMessageResponse = JsonRpcResponse<StreamEvent>;
pub type GetTaskResponse = JsonRpcResponse<Task>;
pub type CancelTaskResponse = JsonRpcResponse<Task>;
pub type SetTaskPushNotificationConfigResponse = JsonRpcResponse<TaskPushNotificationConfig>;
pub type GetTaskPushNotificationConfigResponse = JsonRpcResponse<TaskPushNotificationConfig>;
