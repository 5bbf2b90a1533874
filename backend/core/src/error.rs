use thiserror::Error;

/// Top-level error type for Docsmith agents.
///
/// Agents collapse every failure into one of two kinds: problems detectable
/// before any network call (`Config`), and anything surfaced by or about the
/// remote service (`Remote`). The underlying message text is preserved; the
/// `Display` form — and therefore the envelope's `error` field — carries it
/// behind a `configuration error: ` / `remote service error: ` kind prefix.
#[derive(Debug, Error)]
pub enum AgentError {
    #[error("configuration error: {0}")]
    Config(String),

    #[error("remote service error: {0}")]
    Remote(String),
}

impl AgentError {
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    pub fn remote(msg: impl Into<String>) -> Self {
        Self::Remote(msg.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_prefixes_kind_and_preserves_message() {
        assert_eq!(
            AgentError::config("credentials not configured").to_string(),
            "configuration error: credentials not configured"
        );
        assert_eq!(
            AgentError::remote("quota exceeded").to_string(),
            "remote service error: quota exceeded"
        );
    }
}
