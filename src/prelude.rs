//! Convenience re-exports for common use.

pub use crate::card::{
    select_agent_card, AgentCardResolver, AgentCardSource, CardSelection, CardSource,
    ExtendedCardRequest,
};
pub use crate::client::A2aClient;
pub use crate::config::{AuthValue, CourierConfig};
pub use crate::error::{A2aError, Result};
pub use crate::protocol::{
    CancelTaskRequest, GetTaskPushNotificationConfigRequest, GetTaskRequest,
    MessageSendConfiguration, MessageSendParams, SendMessageRequest, SendMessageResponse,
    SendStreamingMessageRequest, SendStreamingMessageResponse,
    SetTaskPushNotificationConfigRequest, TaskIdParams, TaskQueryParams,
    TaskResubscriptionRequest,
};
pub use crate::types::{
    AgentCard, Message, Part, PushNotificationConfig, Role, SendMessageResult, StreamEvent,
    Task, TaskPushNotificationConfig, TaskState,
};
