//! JSON export with the documented field names and ordering.
//!
//! The export is lossless for page texts, confidences and table grids:
//! [`import_json`] applied to the output of [`export_json`] reproduces them
//! unchanged.

use crate::document::{PageResult, ProcessedDocument, TextSegment};
use crate::error::Result;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Top-level JSON export shape.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JsonExport {
    /// Document-level metadata
    pub document: JsonDocument,
    /// Page payloads in document order
    pub pages: Vec<JsonPage>,
}

/// Document metadata section of the JSON export.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JsonDocument {
    /// Original file name
    #[serde(rename = "fileName")]
    pub file_name: String,
    /// ISO-8601 completion timestamp
    #[serde(rename = "processedAt")]
    pub processed_at: DateTime<Utc>,
    /// Rounded mean of page confidences (0-100)
    #[serde(rename = "overallConfidence")]
    pub overall_confidence: u8,
    /// Number of processed pages
    #[serde(rename = "totalPages")]
    pub total_pages: usize,
}

/// Per-page section of the JSON export.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JsonPage {
    /// 1-based page number
    #[serde(rename = "pageNumber")]
    pub page_number: u32,
    /// Page text
    pub text: String,
    /// Page confidence (0-100)
    pub confidence: u8,
    /// Table presence flag
    #[serde(rename = "hasTable")]
    pub has_table: bool,
    /// Table grid; null when no table was detected
    #[serde(rename = "tableData")]
    pub table_data: Option<Vec<Vec<String>>>,
    /// Segments tiling the page text
    pub segments: Vec<TextSegment>,
}

impl From<&PageResult> for JsonPage {
    fn from(page: &PageResult) -> Self {
        Self {
            page_number: page.page_number,
            text: page.text.clone(),
            confidence: page.confidence,
            has_table: page.has_table,
            table_data: page.table_data.clone(),
            segments: page.segments.clone(),
        }
    }
}

/// Serialize a processed document to pretty-printed JSON.
///
/// # Errors
/// Returns a JSON error when serialization fails.
pub fn export_json(doc: &ProcessedDocument) -> Result<String> {
    let export = JsonExport {
        document: JsonDocument {
            file_name: doc.file_name.clone(),
            processed_at: doc.processed_at,
            overall_confidence: doc.overall_confidence,
            total_pages: doc.total_pages,
        },
        pages: doc.pages.iter().map(JsonPage::from).collect(),
    };
    Ok(serde_json::to_string_pretty(&export)?)
}

/// Parse a JSON export back into its structured form.
///
/// # Errors
/// Returns a JSON error when the input does not match the export shape.
pub fn import_json(json: &str) -> Result<JsonExport> {
    Ok(serde_json::from_str(json)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use std::time::Duration;

    fn sample_doc() -> ProcessedDocument {
        let mut page1 = PageResult::new(1, "Nome|Idade\nAna|30\nBruno|25", 92.0);
        page1.set_table(Some(vec![
            vec!["Nome".to_string(), "Idade".to_string()],
            vec!["Ana".to_string(), "30".to_string()],
            vec!["Bruno".to_string(), "25".to_string()],
        ]));

        ProcessedDocument {
            file_name: "tabela.pdf".to_string(),
            pages: vec![page1, PageResult::new(2, "texto corrido", 71.0)],
            overall_confidence: 82,
            total_pages: 2,
            processed_at: Utc::now(),
            processing_time: Duration::from_millis(340),
            document_type: None,
            detected_language: None,
            summary: None,
            exports: None,
        }
    }

    #[test]
    fn test_json_field_names() {
        let json = export_json(&sample_doc()).unwrap();
        for field in [
            "\"fileName\"",
            "\"processedAt\"",
            "\"overallConfidence\"",
            "\"totalPages\"",
            "\"pageNumber\"",
            "\"hasTable\"",
            "\"tableData\"",
            "\"startIndex\"",
            "\"endIndex\"",
        ] {
            assert!(json.contains(field), "missing field {field}");
        }
    }

    #[test]
    fn test_json_roundtrip_is_lossless() {
        let doc = sample_doc();
        let json = export_json(&doc).unwrap();
        let back = import_json(&json).unwrap();

        assert_eq!(back.document.file_name, doc.file_name);
        assert_eq!(back.document.overall_confidence, doc.overall_confidence);
        assert_eq!(back.document.total_pages, doc.total_pages);
        assert_eq!(back.pages.len(), doc.pages.len());

        for (exported, original) in back.pages.iter().zip(&doc.pages) {
            assert_eq!(exported.page_number, original.page_number);
            assert_eq!(exported.text, original.text);
            assert_eq!(exported.confidence, original.confidence);
            assert_eq!(exported.has_table, original.has_table);
            assert_eq!(exported.table_data, original.table_data);
            assert_eq!(exported.segments, original.segments);
        }
    }

    #[test]
    fn test_table_data_null_when_absent() {
        let json = export_json(&sample_doc()).unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert!(parsed["pages"][1]["tableData"].is_null());
    }
}
