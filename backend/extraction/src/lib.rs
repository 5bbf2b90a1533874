//! `docsmith-extraction` — text extraction agent backed by Azure Document
//! Intelligence.
//!
//! A single-function adapter: resolve the invocation payload to a dispatch
//! path (raw bytes or remote URL), submit it to the analysis service with a
//! fixed prebuilt model, await the job, and flatten the hierarchical result
//! (pages → lines, tables → cells) into one text blob plus metadata. All
//! failures surface as the uniform `{"error", "result": null}` envelope —
//! never as a fault crossing the agent boundary.

pub mod agent;
pub mod client;
pub mod config;
pub mod flatten;
pub mod input;
pub mod schema;

pub use agent::TextExtractionAgent;
pub use client::DocIntelClient;
pub use config::ExtractionConfig;
pub use flatten::{AnalyzeResult, ExtractionMetadata, TableCell};
pub use input::ExtractionInput;
