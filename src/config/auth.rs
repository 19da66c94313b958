//! Credential values for the authenticated extended card.

use serde::{Deserialize, Serialize};

use crate::error::A2aError;

/// A credential, either inline or read from the environment at use time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "value", rename_all = "snake_case")]
pub enum AuthValue {
    /// Bearer token used as-is.
    BearerToken(String),
    /// Environment variable name to read at runtime.
    EnvVar(String),
}

impl AuthValue {
    /// Resolve to the actual secret string.
    pub fn resolve(&self) -> Result<String, A2aError> {
        match self {
            Self::BearerToken(t) => Ok(t.clone()),
            Self::EnvVar(var) => std::env::var(var).map_err(|_| {
                A2aError::Authentication(format!("Environment variable {var} not set"))
            }),
        }
    }
}
