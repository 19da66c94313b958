//! Command-line interface for the courier binary.

use std::path::PathBuf;

use clap::Parser;

use crate::config::{AuthValue, CourierConfig};
use crate::error::Result;
use crate::runner::{RunOptions, DEFAULT_MESSAGE};

/// Resolve an A2A agent's card and send it a message.
#[derive(Parser, Debug)]
#[command(name = "a2a-courier", version, about = "Resolve an A2A agent card and send it a message")]
pub struct Cli {
    /// Base address of the agent service
    #[arg(short, long)]
    pub base_url: Option<String>,

    /// Relative path of the public agent card
    #[arg(long)]
    pub card_path: Option<String>,

    /// Relative path of the authenticated extended agent card
    #[arg(long)]
    pub extended_card_path: Option<String>,

    /// Bearer token for the extended agent card
    #[arg(short, long)]
    pub token: Option<String>,

    /// Connect and per-read timeout in seconds
    #[arg(long)]
    pub timeout_secs: Option<u64>,

    /// Config file (TOML); defaults to ~/.a2a-courier/config.toml when present
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Skip the single-response send
    #[arg(long)]
    pub no_send: bool,

    /// Skip the streaming send
    #[arg(long)]
    pub no_stream: bool,

    /// Message text to send
    #[arg(default_value = DEFAULT_MESSAGE)]
    pub text: String,
}

impl Cli {
    /// Build the effective configuration: file, then env, then flags.
    pub fn load_config(&self) -> Result<CourierConfig> {
        let base = match &self.config {
            Some(path) => CourierConfig::load_file(path)?,
            None => CourierConfig::load_default_file()?,
        };
        Ok(self.apply_overrides(base.with_env()))
    }

    /// Apply command-line flags on top of `config`.
    pub fn apply_overrides(&self, mut config: CourierConfig) -> CourierConfig {
        if let Some(url) = &self.base_url {
            config.base_url = url.clone();
        }
        if let Some(path) = &self.card_path {
            config.agent_card_path = path.clone();
        }
        if let Some(path) = &self.extended_card_path {
            config.extended_card_path = path.clone();
        }
        if let Some(token) = &self.token {
            config.extended_card_auth = AuthValue::BearerToken(token.clone());
        }
        if let Some(secs) = self.timeout_secs {
            config.timeout_secs = secs;
        }
        config
    }

    pub fn run_options(&self) -> RunOptions {
        RunOptions {
            text: self.text.clone(),
            send: !self.no_send,
            stream: !self.no_stream,
        }
    }
}

/// Install the log subscriber: `RUST_LOG` if set, otherwise `info`, on stderr.
pub fn init_tracing() {
    use tracing_subscriber::{fmt, prelude::*, EnvFilter};

    let _ = tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with(fmt::layer().with_writer(std::io::stderr))
        .try_init();
}
