//! Uniform output envelope shared by all agents.
//!
//! Success and failure are both ordinary return values. Exactly one of the
//! two shapes is produced per invocation: `{"result", "metadata"}` on
//! success, `{"error", "result": null}` on failure — never both, never an
//! escaping fault.

use serde_json::{json, Value};

/// Build the success envelope.
pub fn success(result: impl Into<Value>, metadata: Value) -> Value {
    let result: Value = result.into();
    json!({
        "result": result,
        "metadata": metadata,
    })
}

/// Build the failure envelope. The message is preserved verbatim.
pub fn failure(message: impl Into<String>) -> Value {
    let message: String = message.into();
    json!({
        "error": message,
        "result": Value::Null,
    })
}

/// True if an envelope carries a failure.
pub fn is_failure(envelope: &Value) -> bool {
    envelope.get("error").is_some()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn success_has_result_and_metadata_only() {
        let env = success("text", json!({"pages": 1}));
        assert_eq!(env["result"], "text");
        assert_eq!(env["metadata"]["pages"], 1);
        assert!(env.get("error").is_none());
        assert!(!is_failure(&env));
    }

    #[test]
    fn failure_has_null_result() {
        let env = failure("something broke");
        assert_eq!(env["error"], "something broke");
        assert!(env["result"].is_null());
        assert!(is_failure(&env));
    }
}
