//! Static schema and discovery records for the extraction agent.
//!
//! Pure data: every function here is deterministic, side-effect free, and
//! stable across calls. The input schema nominally requires `file_bytes` so
//! the host can detect the primary field, but `file_url` is an accepted
//! alternative — callers must treat the schema as permissive, not exhaustive.

use serde_json::{json, Value};

pub const AGENT_ID: &str = "text_extraction";
pub const AGENT_NAME: &str = "Text Extraction Agent";

/// JSON Schema for the invocation payload.
pub fn input_schema() -> Value {
    json!({
        "type": "object",
        "properties": {
            "file_bytes": {
                "type": "string",
                "description": "Base64 encoded file bytes or binary data"
            },
            "file_url": {
                "type": "string",
                "description": "URL to the document to extract"
            }
        },
        "required": ["file_bytes"]
    })
}

/// JSON Schema for the success-path output fields.
pub fn output_schema() -> Value {
    json!({
        "type": "object",
        "properties": {
            "result": {
                "type": "string",
                "description": "Extracted text content"
            },
            "metadata": {
                "type": "object",
                "description": "Extraction metadata including pages and tables"
            }
        }
    })
}

/// Static descriptive record for discovery/registration by the host system.
pub fn metadata() -> Value {
    json!({
        "id": AGENT_ID,
        "name": AGENT_NAME,
        "description": LONG_DESCRIPTION,
        "cost": "$0.001 per page",
        "api_endpoint": "/agents/text_extraction/run",
        "category": "document_processing",
        "agent_type": "generalized",
    })
}

const LONG_DESCRIPTION: &str = "The Text Extraction Agent uses Azure Document Intelligence (formerly Form Recognizer) to extract text, tables, and structured data from documents. It provides high-accuracy text extraction from PDFs, images, and scanned documents, and is the usual first step in document processing workflows.

The agent accepts two input types: file_bytes (base64 encoded file bytes or binary data provided directly) and file_url (a URL to a remotely stored document). The document is analyzed with a prebuilt layout model; the agent waits for the analysis operation to complete and flattens the hierarchical result.

Extracted text preserves document structure with a 'page number X' marker ahead of each page, followed by every recognized line on that page in reading order. Detected tables are reported with complete cell information — row index, column index, and cell content — allowing full table reconstruction downstream.

Results include the extracted text and a metadata object with pages (number of pages processed), tables (number of tables detected), tables_data (per-table arrays of {row, column, content} cells), and model (the prebuilt model used).

The agent works with PDF files (primary format), images (JPG, PNG) for OCR, and scanned documents, and performs best on clear, high-quality sources. Typical applications include document digitization, invoice and receipt processing, form data extraction, and legal or financial document analysis. Cost is based on Azure Document Intelligence pricing ($0.001 per page).";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn schema_probes_are_stable_across_calls() {
        assert_eq!(input_schema(), input_schema());
        assert_eq!(output_schema(), output_schema());
        assert_eq!(metadata(), metadata());
    }

    #[test]
    fn input_schema_advertises_both_fields() {
        let schema = input_schema();
        assert!(schema["properties"]["file_bytes"].is_object());
        assert!(schema["properties"]["file_url"].is_object());
        assert_eq!(schema["required"][0], "file_bytes");
    }

    #[test]
    fn metadata_identifies_the_agent() {
        let meta = metadata();
        assert_eq!(meta["id"], AGENT_ID);
        assert_eq!(meta["category"], "document_processing");
        assert_eq!(meta["cost"], "$0.001 per page");
        assert!(meta["description"].as_str().unwrap().len() > 200);
    }
}
