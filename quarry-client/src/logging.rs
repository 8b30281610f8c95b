//! `tracing` subscriber setup

use crate::config::ObservabilityConfig;
use crate::error::{ClientError, Result};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    Pretty,
    Json,
}

impl LogFormat {
    /// `LOG_FORMAT` wins over the configured value; anything but "json" is pretty
    pub fn resolve(env: Option<&str>, configured: &str) -> Self {
        match env.unwrap_or(configured).trim().to_ascii_lowercase().as_str() {
            "json" => LogFormat::Json,
            _ => LogFormat::Pretty,
        }
    }
}

/// Install the global subscriber. Fails if one is already installed.
pub fn init(config: &ObservabilityConfig) -> Result<()> {
    let format = LogFormat::resolve(
        std::env::var("LOG_FORMAT").ok().as_deref(),
        &config.log_format,
    );
    let filter = std::env::var("RUST_LOG").unwrap_or_else(|_| config.log_level.clone());

    let (json, pretty) = match format {
        LogFormat::Json => (Some(tracing_subscriber::fmt::layer().json()), None),
        LogFormat::Pretty => (None, Some(tracing_subscriber::fmt::layer())),
    };

    tracing_subscriber::registry()
        .with(EnvFilter::new(filter))
        .with(json)
        .with(pretty)
        .try_init()
        .map_err(|e| ClientError::Config(format!("Logging already initialised: {}", e)))
}
