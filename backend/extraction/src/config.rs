//! Service configuration for the extraction agent.
//!
//! Credentials come from process configuration; this crate only checks that
//! they are present. Storage and rotation are the config layer's problem.

use std::collections::HashMap;

use docsmith_core::AgentError;

/// Env var carrying the Azure Document Intelligence endpoint URL.
pub const ENDPOINT_VAR: &str = "AZURE_FORMRECOGNIZER_ENDPOINT";
/// Env var carrying the static API key.
pub const KEY_VAR: &str = "AZURE_FORMRECOGNIZER_KEY";
/// Env var overriding the prebuilt model identifier.
pub const MODEL_VAR: &str = "AZURE_PREBUILT_MODEL";

/// Fixed extraction profile applied by the remote service. The layout model
/// is the one that reports tables alongside page text.
pub const DEFAULT_MODEL: &str = "prebuilt-layout";

/// Credentials and model selection for one extraction agent.
#[derive(Debug, Clone)]
pub struct ExtractionConfig {
    pub endpoint: String,
    pub key: String,
    pub model: String,
}

impl ExtractionConfig {
    pub fn new(endpoint: impl Into<String>, key: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
            key: key.into(),
            model: DEFAULT_MODEL.to_string(),
        }
    }

    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    /// Read configuration from process env vars.
    pub fn from_env() -> Self {
        Self::from_env_map(&std::env::vars().collect())
    }

    /// Read configuration from a provided map (useful for testing).
    pub fn from_env_map(env: &HashMap<String, String>) -> Self {
        let get = |k: &str| env.get(k).cloned().unwrap_or_default();
        let model = match env.get(MODEL_VAR) {
            Some(m) if !m.is_empty() => m.clone(),
            _ => DEFAULT_MODEL.to_string(),
        };
        Self {
            endpoint: get(ENDPOINT_VAR),
            key: get(KEY_VAR),
            model,
        }
    }

    /// Fail before any network call when credentials are missing.
    pub fn validate(&self) -> Result<(), AgentError> {
        if self.endpoint.is_empty() || self.key.is_empty() {
            return Err(AgentError::config(
                "Azure Form Recognizer credentials not configured",
            ));
        }
        Ok(())
    }
}
