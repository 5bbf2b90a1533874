//! Response flattening — hierarchical analysis result to flat text + metadata.
//!
//! The service returns pages of ordered lines and tables of cells. Flattening
//! walks both in the order the service reports them: pages become one
//! newline-delimited string with `page number N` markers, tables become flat
//! per-table cell lists. Nothing is sorted, deduplicated, or normalized here.

use serde::{Deserialize, Serialize};

/// Hierarchical result body returned by the analysis service.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalyzeResult {
    #[serde(default)]
    pub pages: Vec<DocumentPage>,
    #[serde(default)]
    pub tables: Vec<DocumentTable>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DocumentPage {
    #[serde(default)]
    pub lines: Vec<DocumentLine>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DocumentLine {
    pub content: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DocumentTable {
    #[serde(default)]
    pub cells: Vec<DocumentCell>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DocumentCell {
    pub row_index: u32,
    pub column_index: u32,
    #[serde(default)]
    pub content: String,
}

/// One table cell in the flattened output, indices exactly as reported.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TableCell {
    pub row: u32,
    pub column: u32,
    pub content: String,
}

/// Metadata summarizing one extraction.
#[derive(Debug, Clone, Serialize)]
pub struct ExtractionMetadata {
    pub pages: usize,
    pub tables: usize,
    pub tables_data: Vec<Vec<TableCell>>,
    pub model: String,
}

/// Flatten the hierarchical result into `(text, metadata)`.
///
/// Text is built page by page, 1-indexed: a literal `page number {N}` marker
/// line, then every recognized line on that page, each terminated by `\n`.
pub fn flatten(result: &AnalyzeResult, model: &str) -> (String, ExtractionMetadata) {
    let mut text = String::new();
    for (idx, page) in result.pages.iter().enumerate() {
        text.push_str(&format!("page number {}\n", idx + 1));
        for line in &page.lines {
            text.push_str(&line.content);
            text.push('\n');
        }
    }

    let tables_data: Vec<Vec<TableCell>> = result
        .tables
        .iter()
        .map(|table| {
            table
                .cells
                .iter()
                .map(|cell| TableCell {
                    row: cell.row_index,
                    column: cell.column_index,
                    content: cell.content.clone(),
                })
                .collect()
        })
        .collect();

    let metadata = ExtractionMetadata {
        pages: result.pages.len(),
        tables: tables_data.len(),
        tables_data,
        model: model.to_string(),
    };
    (text, metadata)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn line(content: &str) -> DocumentLine {
        DocumentLine {
            content: content.to_string(),
        }
    }

    fn cell(row: u32, column: u32, content: &str) -> DocumentCell {
        DocumentCell {
            row_index: row,
            column_index: column,
            content: content.to_string(),
        }
    }

    #[test]
    fn text_carries_page_markers_in_document_order() {
        let result = AnalyzeResult {
            pages: vec![
                DocumentPage {
                    lines: vec![line("Hello"), line("World")],
                },
                DocumentPage {
                    lines: vec![line("Foo")],
                },
            ],
            tables: vec![],
        };
        let (text, metadata) = flatten(&result, "prebuilt-layout");
        assert_eq!(text, "page number 1\nHello\nWorld\npage number 2\nFoo\n");
        assert_eq!(metadata.pages, 2);
        assert_eq!(metadata.tables, 0);
        assert_eq!(metadata.model, "prebuilt-layout");
    }

    #[test]
    fn table_cells_pass_through_in_reported_order() {
        let result = AnalyzeResult {
            pages: vec![],
            tables: vec![DocumentTable {
                cells: vec![cell(0, 0, "A"), cell(0, 1, "B"), cell(1, 0, "C")],
            }],
        };
        let (_, metadata) = flatten(&result, "prebuilt-layout");
        assert_eq!(metadata.tables, 1);
        assert_eq!(
            metadata.tables_data[0],
            vec![
                TableCell { row: 0, column: 0, content: "A".into() },
                TableCell { row: 0, column: 1, content: "B".into() },
                TableCell { row: 1, column: 0, content: "C".into() },
            ]
        );
    }

    #[test]
    fn duplicate_cells_are_not_deduplicated() {
        let result = AnalyzeResult {
            pages: vec![],
            tables: vec![DocumentTable {
                cells: vec![cell(0, 0, "A"), cell(0, 0, "A")],
            }],
        };
        let (_, metadata) = flatten(&result, "m");
        assert_eq!(metadata.tables_data[0].len(), 2);
    }

    #[test]
    fn empty_result_yields_empty_text() {
        let (text, metadata) = flatten(&AnalyzeResult::default(), "m");
        assert!(text.is_empty());
        assert_eq!(metadata.pages, 0);
        assert_eq!(metadata.tables, 0);
        assert!(metadata.tables_data.is_empty());
    }

    #[test]
    fn wire_shape_deserializes_from_service_json() {
        let raw = serde_json::json!({
            "pages": [{"lines": [{"content": "Invoice", "polygon": [0,0]}]}],
            "tables": [{"rowCount": 1, "columnCount": 1,
                        "cells": [{"rowIndex": 0, "columnIndex": 0, "content": "X"}]}],
            "paragraphs": []
        });
        let result: AnalyzeResult = serde_json::from_value(raw).unwrap();
        assert_eq!(result.pages[0].lines[0].content, "Invoice");
        assert_eq!(result.tables[0].cells[0].content, "X");
    }
}
