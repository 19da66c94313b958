//! Message and part types exchanged with an agent.

use base64::Engine;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use strum::{Display, EnumString};
use uuid::Uuid;

use super::kind::MessageKind;

/// Sender of a message.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Display, EnumString)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Role {
    User,
    Agent,
}

/// A single communication turn between client and agent.
///
/// Unmodeled fields are kept in `extra` so a received message re-serializes
/// as it arrived.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Message {
    #[serde(default)]
    pub kind: MessageKind,
    pub role: Role,
    pub parts: Vec<Part>,
    pub message_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub task_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub context_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reference_task_ids: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metadata: Option<Map<String, Value>>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Message {
    /// Create a message with a freshly generated id.
    pub fn new(role: Role, parts: Vec<Part>) -> Self {
        Self {
            kind: MessageKind::Kind,
            role,
            parts,
            message_id: Uuid::new_v4().simple().to_string(),
            task_id: None,
            context_id: None,
            reference_task_ids: None,
            metadata: None,
            extra: Map::new(),
        }
    }

    /// Create a user message with one text part.
    pub fn user_text(text: impl Into<String>) -> Self {
        Self::new(Role::User, vec![Part::text(text)])
    }

    /// Continue an existing task or context.
    pub fn with_task(mut self, task_id: impl Into<String>, context_id: Option<String>) -> Self {
        self.task_id = Some(task_id.into());
        self.context_id = context_id;
        self
    }

    /// Extract the text content, concatenating all text parts.
    pub fn text(&self) -> String {
        self.parts
            .iter()
            .filter_map(|part| match part {
                Part::Text { text, .. } => Some(text.as_str()),
                _ => None,
            })
            .collect::<Vec<_>>()
            .join("")
    }
}

/// A piece of message or artifact content, discriminated by `kind`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum Part {
    Text {
        text: String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        metadata: Option<Map<String, Value>>,
    },
    File {
        file: FileContent,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        metadata: Option<Map<String, Value>>,
    },
    Data {
        data: Map<String, Value>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        metadata: Option<Map<String, Value>>,
    },
}

impl Part {
    pub fn text(text: impl Into<String>) -> Self {
        Self::Text {
            text: text.into(),
            metadata: None,
        }
    }

    pub fn file(file: FileContent) -> Self {
        Self::File {
            file,
            metadata: None,
        }
    }

    pub fn data(data: Map<String, Value>) -> Self {
        Self::Data {
            data,
            metadata: None,
        }
    }
}

/// File content, either inline (base64) or by reference.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FileContent {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mime_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bytes: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub uri: Option<String>,
}

impl FileContent {
    /// Inline file from raw bytes.
    pub fn from_bytes(data: &[u8], mime_type: impl Into<String>, name: Option<String>) -> Self {
        Self {
            name,
            mime_type: Some(mime_type.into()),
            bytes: Some(base64::engine::general_purpose::STANDARD.encode(data)),
            uri: None,
        }
    }

    /// File referenced by URI.
    pub fn from_uri(uri: impl Into<String>, mime_type: Option<String>) -> Self {
        Self {
            name: None,
            mime_type,
            bytes: None,
            uri: Some(uri.into()),
        }
    }

    /// Decode inline bytes. `None` for URI-only files.
    pub fn decode_bytes(&self) -> Option<Result<Vec<u8>, base64::DecodeError>> {
        self.bytes
            .as_deref()
            .map(|b| base64::engine::general_purpose::STANDARD.decode(b))
    }
}
