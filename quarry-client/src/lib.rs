//! Connection plumbing for `quarry`
//!
//! - [`HttpTransport`]: a [`quarry::Transport`] that POSTs request documents
//!   to `{url}/{index}/_search`
//! - [`Config`]: TOML configuration for the connection, search defaults and
//!   log output
//! - [`logging::init`]: one-shot `tracing` subscriber setup

pub mod config;
pub mod error;
pub mod http;
pub mod logging;

pub use config::{Config, ConnectionConfig, ObservabilityConfig, SearchConfig};
pub use error::{ClientError, Result};
pub use http::HttpTransport;
