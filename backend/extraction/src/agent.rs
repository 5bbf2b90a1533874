//! The extraction agent — resolver, invoker, and flattener composed in
//! sequence behind the uniform `Agent` entry point.

use std::time::Duration;

use async_trait::async_trait;
use docsmith_core::{envelope, Agent, AgentError};
use serde_json::Value;
use tracing::{info, warn};

use crate::client::DocIntelClient;
use crate::config::ExtractionConfig;
use crate::flatten::{flatten, ExtractionMetadata};
use crate::input;
use crate::schema;

/// Forwards a document (bytes or URL) to Azure Document Intelligence and
/// flattens the response into text plus metadata.
///
/// Each invocation is fully isolated: nothing survives across calls, and the
/// agent is safe to invoke concurrently from independent callers.
pub struct TextExtractionAgent {
    config: ExtractionConfig,
    poll_interval: Option<Duration>,
}

impl TextExtractionAgent {
    pub fn new(config: ExtractionConfig) -> Self {
        Self {
            config,
            poll_interval: None,
        }
    }

    /// Construct with credentials taken from process env vars.
    pub fn from_env() -> Self {
        Self::new(ExtractionConfig::from_env())
    }

    /// Override the delay between result polls (tests use a short interval).
    pub fn with_poll_interval(mut self, interval: Duration) -> Self {
        self.poll_interval = Some(interval);
        self
    }

    /// The fallible pipeline: resolve → invoke → flatten.
    async fn extract(&self, payload: &Value) -> Result<(String, ExtractionMetadata), AgentError> {
        let resolved = input::resolve(payload)?;

        let mut client = DocIntelClient::new(&self.config)?;
        if let Some(interval) = self.poll_interval {
            client = client.with_poll_interval(interval);
        }

        let result = client.analyze(&self.config.model, &resolved).await?;
        Ok(flatten(&result, &self.config.model))
    }
}

#[async_trait]
impl Agent for TextExtractionAgent {
    fn id(&self) -> &str {
        schema::AGENT_ID
    }

    fn description(&self) -> &str {
        "Extracts text and tables from documents via Azure Document Intelligence"
    }

    fn input_schema(&self) -> Value {
        schema::input_schema()
    }

    fn output_schema(&self) -> Value {
        schema::output_schema()
    }

    fn metadata(&self) -> Value {
        schema::metadata()
    }

    /// Single error boundary: every failure inside the pipeline is converted
    /// here into the failure envelope. Callers never see a fault.
    async fn run(&self, payload: Value) -> Value {
        match self.extract(&payload).await {
            Ok((text, metadata)) => {
                info!(
                    pages = metadata.pages,
                    tables = metadata.tables,
                    "Extraction succeeded"
                );
                match serde_json::to_value(&metadata) {
                    Ok(meta) => envelope::success(text, meta),
                    Err(e) => envelope::failure(e.to_string()),
                }
            }
            Err(e) => {
                warn!(error = %e, "Extraction failed");
                envelope::failure(e.to_string())
            }
        }
    }
}
