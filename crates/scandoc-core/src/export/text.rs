//! Plain-text export: page-delimited with a confidence header per page.

use crate::document::ProcessedDocument;
use std::fmt::Write;

/// Serialize a processed document to plain text.
///
/// A document header (file name, timestamp, overall confidence, page count)
/// is followed by one `--- Página N (Confiabilidade: X%) ---` section per
/// page.
#[must_use = "returns the serialized text without using it"]
pub fn export_txt(doc: &ProcessedDocument) -> String {
    let mut out = String::new();

    // Infallible: writing to a String cannot fail.
    let _ = writeln!(out, "Documento Processado");
    let _ = writeln!(out, "Arquivo: {}", doc.file_name);
    let _ = writeln!(
        out,
        "Processado em: {}",
        doc.processed_at.format("%d/%m/%Y %H:%M:%S")
    );
    let _ = writeln!(out, "Confiabilidade geral: {}%", doc.overall_confidence);
    let _ = writeln!(out, "Total de páginas: {}", doc.total_pages);
    let _ = writeln!(out, "\n{}\n", "=".repeat(60));

    for page in &doc.pages {
        let _ = writeln!(
            out,
            "\n--- Página {} (Confiabilidade: {}%) ---\n",
            page.page_number, page.confidence
        );
        out.push_str(&page.text);
        out.push_str("\n\n");
    }

    out
}
