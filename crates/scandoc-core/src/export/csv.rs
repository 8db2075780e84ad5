//! CSV export: one section per page with a detected table.

use crate::document::ProcessedDocument;
use crate::error::{Result, ScandocError};

/// Serialize the detected tables of a document to CSV.
///
/// Each page with a table contributes a `Página N` marker row followed by
/// that page's grid. Cell values are double-quote-escaped by the writer.
/// Documents without any table produce a single informative line.
///
/// # Errors
/// Returns [`ScandocError::ExportError`] when a record cannot be written.
pub fn export_csv(doc: &ProcessedDocument) -> Result<String> {
    let mut writer = csv::WriterBuilder::new()
        .flexible(true)
        .from_writer(Vec::new());
    let mut wrote_any = false;

    for page in &doc.pages {
        let Some(grid) = page.table_data.as_ref().filter(|_| page.has_table) else {
            continue;
        };
        wrote_any = true;

        writer
            .write_record([format!("Página {}", page.page_number)])
            .map_err(|e| ScandocError::ExportError(e.to_string()))?;
        for row in grid {
            writer
                .write_record(row)
                .map_err(|e| ScandocError::ExportError(e.to_string()))?;
        }
        // Blank line between page sections.
        writer
            .write_record([""])
            .map_err(|e| ScandocError::ExportError(e.to_string()))?;
    }

    if !wrote_any {
        return Ok("Nenhuma tabela detectada no documento.\n".to_string());
    }

    let bytes = writer
        .into_inner()
        .map_err(|e| ScandocError::ExportError(e.to_string()))?;
    String::from_utf8(bytes).map_err(|e| ScandocError::ExportError(e.to_string()))
}
