use async_trait::async_trait;
use serde_json::Value;

/// A document-processing capability the host orchestration system can invoke.
///
/// Every agent exposes three static probes (input schema, output schema,
/// descriptive metadata) and a single `run` entry point. `run` never fails:
/// whatever happens inside, it returns the uniform output envelope — the
/// success shape `{"result": ..., "metadata": ...}` or the failure shape
/// `{"error": ..., "result": null}`. Callers inspect the `error` field rather
/// than catch anything.
#[async_trait]
pub trait Agent: Send + Sync {
    /// Unique id of the agent (e.g., "text_extraction").
    fn id(&self) -> &str;

    /// One-line description for listings.
    fn description(&self) -> &str;

    /// JSON Schema for the agent's input payload.
    fn input_schema(&self) -> Value;

    /// JSON Schema for the agent's success-path output fields.
    fn output_schema(&self) -> Value;

    /// Static descriptive record for discovery/registration by the host.
    fn metadata(&self) -> Value;

    /// Execute the agent against an input payload, returning the envelope.
    async fn run(&self, input: Value) -> Value;
}
