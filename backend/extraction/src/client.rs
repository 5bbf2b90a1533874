//! Azure Document Intelligence client — submit and await one analysis job.
//!
//! One outbound submit call, then polling of the returned operation URL until
//! the job reaches a terminal state. No retries, no adapter-side timeout, no
//! partial results: a single invocation has a single terminal outcome.

use std::time::Duration;

use docsmith_core::AgentError;
use reqwest::header::CONTENT_TYPE;
use serde::Deserialize;
use serde_json::json;
use tracing::{debug, info};

use crate::config::ExtractionConfig;
use crate::flatten::AnalyzeResult;
use crate::input::ExtractionInput;

const API_VERSION: &str = "2023-07-31";
const KEY_HEADER: &str = "Ocp-Apim-Subscription-Key";
const DEFAULT_POLL_INTERVAL: Duration = Duration::from_secs(1);

/// Poll response wrapper around the eventual analysis result.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct AnalyzeOperation {
    status: String,
    analyze_result: Option<AnalyzeResult>,
    error: Option<OperationError>,
}

#[derive(Debug, Deserialize)]
struct OperationError {
    #[serde(default)]
    code: String,
    #[serde(default)]
    message: String,
}

/// Thin client over the Document Intelligence analyze REST API.
#[derive(Debug)]
pub struct DocIntelClient {
    http: reqwest::Client,
    endpoint: String,
    key: String,
    poll_interval: Duration,
}

impl DocIntelClient {
    /// Build a client, failing before any network call if credentials are
    /// missing.
    pub fn new(config: &ExtractionConfig) -> Result<Self, AgentError> {
        config.validate()?;
        Ok(Self {
            http: reqwest::Client::new(),
            endpoint: config.endpoint.trim_end_matches('/').to_string(),
            key: config.key.clone(),
            poll_interval: DEFAULT_POLL_INTERVAL,
        })
    }

    /// Override the delay between result polls.
    pub fn with_poll_interval(mut self, interval: Duration) -> Self {
        self.poll_interval = interval;
        self
    }

    /// Submit the resolved input and block until the job completes.
    pub async fn analyze(
        &self,
        model: &str,
        input: &ExtractionInput,
    ) -> Result<AnalyzeResult, AgentError> {
        let operation_url = match input {
            ExtractionInput::Bytes(bytes) => {
                info!(model, size = bytes.len(), "Submitting document bytes for analysis");
                self.submit_bytes(model, bytes.clone()).await?
            }
            ExtractionInput::Url(url) => {
                info!(model, url = %url, "Submitting document URL for analysis");
                self.submit_url(model, url).await?
            }
        };
        self.await_result(&operation_url).await
    }

    fn analyze_url(&self, model: &str) -> String {
        format!(
            "{}/formrecognizer/documentModels/{}:analyze?api-version={}",
            self.endpoint, model, API_VERSION
        )
    }

    async fn submit_bytes(&self, model: &str, bytes: Vec<u8>) -> Result<String, AgentError> {
        let resp = self
            .http
            .post(self.analyze_url(model))
            .header(KEY_HEADER, &self.key)
            .header(CONTENT_TYPE, "application/octet-stream")
            .body(bytes)
            .send()
            .await
            .map_err(|e| AgentError::remote(e.to_string()))?;
        Self::operation_location(resp).await
    }

    async fn submit_url(&self, model: &str, document_url: &str) -> Result<String, AgentError> {
        let resp = self
            .http
            .post(self.analyze_url(model))
            .header(KEY_HEADER, &self.key)
            .json(&json!({ "urlSource": document_url }))
            .send()
            .await
            .map_err(|e| AgentError::remote(e.to_string()))?;
        Self::operation_location(resp).await
    }

    async fn operation_location(resp: reqwest::Response) -> Result<String, AgentError> {
        if !resp.status().is_success() {
            let status = resp.status();
            let body = resp.text().await.unwrap_or_default();
            return Err(AgentError::remote(format!(
                "analyze request rejected ({status}): {body}"
            )));
        }
        resp.headers()
            .get("operation-location")
            .and_then(|v| v.to_str().ok())
            .map(str::to_string)
            .ok_or_else(|| {
                AgentError::remote("service response missing Operation-Location header")
            })
    }

    /// Poll the operation URL until the job reaches a terminal state.
    async fn await_result(&self, operation_url: &str) -> Result<AnalyzeResult, AgentError> {
        loop {
            let resp = self
                .http
                .get(operation_url)
                .header(KEY_HEADER, &self.key)
                .send()
                .await
                .map_err(|e| AgentError::remote(e.to_string()))?;
            if !resp.status().is_success() {
                let status = resp.status();
                let body = resp.text().await.unwrap_or_default();
                return Err(AgentError::remote(format!(
                    "result poll rejected ({status}): {body}"
                )));
            }
            let op: AnalyzeOperation = resp
                .json()
                .await
                .map_err(|e| AgentError::remote(format!("malformed operation response: {e}")))?;

            debug!(status = %op.status, "Analysis operation status");
            match op.status.as_str() {
                "succeeded" => {
                    return op.analyze_result.ok_or_else(|| {
                        AgentError::remote("operation succeeded without an analyzeResult body")
                    });
                }
                "failed" | "canceled" => {
                    let msg = op
                        .error
                        .map(|e| {
                            if e.code.is_empty() {
                                e.message
                            } else {
                                format!("{}: {}", e.code, e.message)
                            }
                        })
                        .unwrap_or_else(|| format!("analysis {}", op.status));
                    return Err(AgentError::remote(msg));
                }
                _ => tokio::time::sleep(self.poll_interval).await,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_credentials_rejected_before_any_call() {
        let cfg = ExtractionConfig::new("", "");
        let err = DocIntelClient::new(&cfg).unwrap_err();
        assert!(matches!(err, AgentError::Config(_)));
    }

    #[test]
    fn analyze_url_strips_trailing_slash() {
        let cfg = ExtractionConfig::new("https://region.example.com/", "key");
        let client = DocIntelClient::new(&cfg).unwrap();
        assert_eq!(
            client.analyze_url("prebuilt-layout"),
            "https://region.example.com/formrecognizer/documentModels/prebuilt-layout:analyze?api-version=2023-07-31"
        );
    }
}
