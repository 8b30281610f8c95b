//! The request-in/response-out boundary to the search engine

use crate::command::SearchCommand;
use crate::error::Result;
use crate::results::Results;
use async_trait::async_trait;
use serde_json::Value;
use std::sync::Arc;

/// Executes a rendered request document against an index
///
/// Implementations own everything about the wire: hosts, retries, timeouts.
/// A failure to reach the engine or a rejected request is reported as
/// [`Error::Transport`](crate::Error::Transport).
#[async_trait]
pub trait Transport: Send + Sync {
    async fn execute(&self, request: &Value, index: &str) -> Result<Value>;
}

#[async_trait]
impl<T: Transport + ?Sized> Transport for Arc<T> {
    async fn execute(&self, request: &Value, index: &str) -> Result<Value> {
        (**self).execute(request, index).await
    }
}

/// Runs one [`SearchCommand`] through a [`Transport`]
pub struct Finder<'a, T: Transport + ?Sized> {
    transport: &'a T,
    command: SearchCommand,
}

impl<'a, T: Transport + ?Sized> Finder<'a, T> {
    pub fn new(transport: &'a T, command: SearchCommand) -> Self {
        Self { transport, command }
    }

    /// Build the request, send it and map the response
    pub async fn find(self) -> Result<Results> {
        let index = self.command.index()?;
        let request = self.command.build_query();

        tracing::debug!(index, request = %request, "Executing search");

        let response = self.transport.execute(&request, index).await?;
        let results = Results::from_response(response)?;

        tracing::debug!(index, total = results.count(), "Search finished");

        Ok(results)
    }
}
