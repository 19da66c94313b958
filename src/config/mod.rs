//! Configuration system (layered: defaults < config file < env < explicit overrides).

pub mod auth;

pub use auth::AuthValue;

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::card::{
    AgentCardResolver, ExtendedCardRequest, EXTENDED_AGENT_CARD_PATH, PUBLIC_AGENT_CARD_PATH,
};
use crate::error::{A2aError, Result};

pub const DEFAULT_BASE_URL: &str = "http://localhost:9999";
pub const DEFAULT_EXTENDED_CARD_TOKEN: &str = "dummy-token-for-extended-card";
pub const DEFAULT_TIMEOUT_SECS: u64 = 120;

/// Settings for resolving an agent and talking to it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CourierConfig {
    /// Base address of the agent service.
    pub base_url: String,
    /// Relative path of the public agent card.
    pub agent_card_path: String,
    /// Relative path of the authenticated extended agent card.
    pub extended_card_path: String,
    /// Credential sent as a bearer token when fetching the extended card.
    pub extended_card_auth: AuthValue,
    /// Connect and per-read timeout in seconds.
    pub timeout_secs: u64,
}

impl Default for CourierConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            agent_card_path: PUBLIC_AGENT_CARD_PATH.to_string(),
            extended_card_path: EXTENDED_AGENT_CARD_PATH.to_string(),
            extended_card_auth: AuthValue::BearerToken(DEFAULT_EXTENDED_CARD_TOKEN.to_string()),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }
}

impl CourierConfig {
    /// Parse a TOML document. Missing keys keep their defaults.
    pub fn from_toml_str(raw: &str) -> Result<Self> {
        toml::from_str(raw)
            .map_err(|e| A2aError::Configuration(format!("Invalid config file: {e}")))
    }

    /// Load a TOML config file that must exist.
    pub fn load_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let raw = fs::read_to_string(path).map_err(|e| {
            A2aError::Configuration(format!("Cannot read config file {}: {e}", path.display()))
        })?;
        Self::from_toml_str(&raw)
    }

    /// Load the default config file, or defaults if there is none.
    pub fn load_default_file() -> Result<Self> {
        let path = Self::default_config_path();
        match fs::metadata(&path) {
            Ok(_) => Self::load_file(&path),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(Self::default()),
            Err(err) => Err(A2aError::Io(err)),
        }
    }

    /// Default config file path (`~/.a2a-courier/config.toml`).
    pub fn default_config_path() -> PathBuf {
        directories::UserDirs::new()
            .map(|dirs| dirs.home_dir().join(".a2a-courier"))
            .unwrap_or_else(|| PathBuf::from(".a2a-courier"))
            .join("config.toml")
    }

    /// Overlay environment variables (after loading `.env` if present).
    pub fn with_env(self) -> Self {
        let _ = dotenvy::dotenv(); // load .env if present, ignore error
        self.with_env_from(|name| std::env::var(name).ok())
    }

    /// Overlay variables from an arbitrary lookup.
    pub fn with_env_from(mut self, lookup: impl Fn(&str) -> Option<String>) -> Self {
        if let Some(url) = lookup("A2A_BASE_URL") {
            self.base_url = url;
        }
        if let Some(path) = lookup("A2A_CARD_PATH") {
            self.agent_card_path = path;
        }
        if let Some(path) = lookup("A2A_EXTENDED_CARD_PATH") {
            self.extended_card_path = path;
        }
        if let Some(token) = lookup("A2A_EXTENDED_CARD_TOKEN") {
            self.extended_card_auth = AuthValue::BearerToken(token);
        }
        if let Some(raw) = lookup("A2A_TIMEOUT_SECS") {
            match raw.trim().parse::<u64>() {
                Ok(secs) => self.timeout_secs = secs,
                Err(_) => warn!(value = %raw, "Ignoring invalid A2A_TIMEOUT_SECS"),
            }
        }
        self
    }

    /// Check that the configuration can be used.
    pub fn validate(&self) -> Result<()> {
        let url = reqwest::Url::parse(&self.base_url).map_err(|e| {
            A2aError::Configuration(format!("Invalid base URL '{}': {e}", self.base_url))
        })?;
        if !matches!(url.scheme(), "http" | "https") {
            return Err(A2aError::Configuration(format!(
                "Base URL must be http or https, got '{}'",
                url.scheme()
            )));
        }
        if self.timeout_secs == 0 {
            return Err(A2aError::Configuration(
                "timeout_secs must be greater than zero".to_string(),
            ));
        }
        Ok(())
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// Build the HTTP client for one run.
    pub fn http_client(&self) -> Result<reqwest::Client> {
        crate::transport::build_http_client(self.timeout())
    }

    pub fn resolver(&self, http: reqwest::Client) -> AgentCardResolver {
        AgentCardResolver::new(http, self.base_url.clone())
            .with_agent_card_path(self.agent_card_path.clone())
    }

    pub fn extended_card_request(&self) -> ExtendedCardRequest {
        ExtendedCardRequest::new(self.extended_card_auth.clone())
            .with_path(self.extended_card_path.clone())
    }
}
