//! HTTP transport

use crate::config::ConnectionConfig;
use crate::error::{ClientError, Result};
use async_trait::async_trait;
use quarry::Transport;
use reqwest::Client;
use serde_json::Value;
use url::Url;

/// Sends search requests to a single engine endpoint over HTTP
#[derive(Debug, Clone)]
pub struct HttpTransport {
    client: Client,
    base_url: Url,
}

impl HttpTransport {
    pub fn new(config: &ConnectionConfig) -> Result<Self> {
        let base_url = Url::parse(&config.url)?;
        if !matches!(base_url.scheme(), "http" | "https") || base_url.cannot_be_a_base() {
            return Err(ClientError::Config(format!(
                "Unsupported search engine URL: {}",
                config.url
            )));
        }

        let client = Client::builder()
            .timeout(config.timeout())
            .connect_timeout(config.connect_timeout())
            .build()?;

        Ok(Self { client, base_url })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// `{base}/{index}/_search`, keeping any path prefix on the base URL
    pub fn search_url(&self, index: &str) -> Result<Url> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| ClientError::Config(format!("Cannot append a path to {}", self.base_url)))?
            .pop_if_empty()
            .push(index)
            .push("_search");
        Ok(url)
    }

    pub async fn search(&self, request: &Value, index: &str) -> Result<Value> {
        let url = self.search_url(index)?;
        tracing::debug!(%url, "POST search request");

        let response = self.client.post(url).json(request).send().await?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            tracing::warn!(index, status = status.as_u16(), "Search request rejected");
            return Err(ClientError::Status {
                status: status.as_u16(),
                body,
            });
        }

        Ok(response.json().await?)
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn execute(&self, request: &Value, index: &str) -> quarry::Result<Value> {
        Ok(self.search(request, index).await?)
    }
}
