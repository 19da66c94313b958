//! Error types for a2a-courier.

pub mod unified;

pub use unified::{ErrorCategory, JsonRpcErrorCode, RecoverySuggestion};

use thiserror::Error;

/// Primary error type for all courier operations.
#[derive(Error, Debug)]
pub enum A2aError {
    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("HTTP error (status {status}) from {url}: {body}")]
    Http {
        status: u16,
        url: String,
        body: String,
    },

    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Authentication error: {0}")]
    Authentication(String),

    #[error("JSON-RPC error {code}: {message}")]
    JsonRpc {
        code: i64,
        message: String,
        data: Option<serde_json::Value>,
    },

    #[error("Stream error: {0}")]
    Stream(String),

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Failed to fetch the public agent card. Cannot continue.")]
    PublicCardUnavailable {
        #[source]
        source: Box<A2aError>,
    },
}

impl A2aError {
    /// Create an HTTP status error.
    pub fn http(status: u16, url: impl Into<String>, body: impl Into<String>) -> Self {
        Self::Http {
            status,
            url: url.into(),
            body: body.into(),
        }
    }

    /// Create a JSON-RPC error from a response `error` object.
    pub fn json_rpc(
        code: i64,
        message: impl Into<String>,
        data: Option<serde_json::Value>,
    ) -> Self {
        Self::JsonRpc {
            code,
            message: message.into(),
            data,
        }
    }

    /// Well-known A2A code for a JSON-RPC error, if this is one.
    pub fn json_rpc_code(&self) -> Option<JsonRpcErrorCode> {
        match self {
            Self::JsonRpc { code, .. } => Some(JsonRpcErrorCode::from_code(*code)),
            _ => None,
        }
    }

    /// Classify this error into a category.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::Authentication(_) => ErrorCategory::Authentication,
            Self::Network(e) if e.is_timeout() => ErrorCategory::Timeout,
            Self::Network(_) => ErrorCategory::Network,
            Self::Configuration(_) | Self::InvalidArgument(_) => ErrorCategory::Configuration,
            Self::Serialization(_) => ErrorCategory::Serialization,
            Self::Http { status, .. } => match status {
                401 | 403 => ErrorCategory::Authentication,
                429 => ErrorCategory::RateLimit,
                500..=599 => ErrorCategory::Server,
                _ => ErrorCategory::Api,
            },
            Self::JsonRpc { .. } => ErrorCategory::Protocol,
            Self::Stream(_) => ErrorCategory::Network,
            Self::PublicCardUnavailable { source } => source.category(),
            Self::Io(_) => ErrorCategory::Unknown,
        }
    }

    /// Whether this error is potentially retryable.
    pub fn is_retryable(&self) -> bool {
        matches!(
            self.category(),
            ErrorCategory::RateLimit
                | ErrorCategory::Network
                | ErrorCategory::Timeout
                | ErrorCategory::Server
        )
    }

    /// Suggest recovery actions.
    pub fn recovery_suggestion(&self) -> RecoverySuggestion {
        match self.category() {
            ErrorCategory::Authentication => RecoverySuggestion::CheckCredentials,
            ErrorCategory::RateLimit
            | ErrorCategory::Network
            | ErrorCategory::Server => RecoverySuggestion::RetryLater,
            ErrorCategory::Timeout => RecoverySuggestion::IncreaseTimeout,
            ErrorCategory::Configuration => RecoverySuggestion::CheckConfiguration,
            ErrorCategory::Protocol | ErrorCategory::Api => RecoverySuggestion::CheckRequest,
            _ => RecoverySuggestion::ReportToAgentOperator,
        }
    }
}

/// Convenience alias.
pub type Result<T> = std::result::Result<T, A2aError>;
