//! HTML export: styled per-page sections with confidence badges.

use super::confidence_badge;
use crate::document::ProcessedDocument;
use std::fmt::Write;

/// Escape the characters HTML treats specially.
fn escape_html(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(c),
        }
    }
    out
}

/// Serialize a processed document to a standalone HTML page.
///
/// Each page becomes a styled section with a colored confidence badge
/// (>=90 high, >=70 medium, else low) and, when present, the extracted
/// table rendered with a header row.
#[must_use = "returns the serialized HTML without using it"]
pub fn export_html(doc: &ProcessedDocument) -> String {
    let mut html = format!(
        r#"<!DOCTYPE html>
<html lang="pt-BR">
<head>
  <meta charset="UTF-8">
  <title>{title}</title>
  <style>
    body {{ font-family: sans-serif; max-width: 900px; margin: 40px auto; padding: 20px; line-height: 1.6; }}
    .header {{ background: #2563EB; color: white; padding: 30px; border-radius: 10px; margin-bottom: 30px; }}
    .page {{ background: white; padding: 30px; margin-bottom: 20px; border-radius: 10px; box-shadow: 0 2px 4px rgba(0,0,0,0.1); }}
    .confidence {{ display: inline-block; padding: 5px 15px; border-radius: 20px; font-weight: bold; }}
    .confidence-high {{ background-color: #10B981; color: white; }}
    .confidence-medium {{ background-color: #2563EB; color: white; }}
    .confidence-low {{ background-color: #EF4444; color: white; }}
    table {{ width: 100%; border-collapse: collapse; margin: 20px 0; }}
    th, td {{ border: 1px solid #ddd; padding: 12px; text-align: left; }}
    th {{ background-color: #2563EB; color: white; }}
  </style>
</head>
<body>
  <div class="header">
    <h1>Documento Processado</h1>
    <p><strong>Arquivo:</strong> {title}</p>
    <p><strong>Processado em:</strong> {processed_at}</p>
    <p><strong>Confiabilidade Geral:</strong> <span class="confidence confidence-{badge}">{overall}%</span></p>
    <p><strong>Total de Páginas:</strong> {total}</p>
  </div>
"#,
        title = escape_html(&doc.file_name),
        processed_at = doc.processed_at.format("%d/%m/%Y %H:%M:%S"),
        badge = confidence_badge(doc.overall_confidence),
        overall = doc.overall_confidence,
        total = doc.total_pages,
    );

    for page in &doc.pages {
        let _ = write!(
            html,
            r#"  <div class="page">
    <h2>Página {number}</h2>
    <p><strong>Confiabilidade:</strong> <span class="confidence confidence-{badge}">{confidence}%</span></p>
    <div style="white-space: pre-wrap;">{text}</div>
"#,
            number = page.page_number,
            badge = confidence_badge(page.confidence),
            confidence = page.confidence,
            text = escape_html(&page.text),
        );

        if let Some(grid) = page.table_data.as_ref().filter(|g| !g.is_empty()) {
            html.push_str("    <h3>Tabela Detectada</h3>\n    <table>\n      <thead>\n        <tr>");
            for cell in &grid[0] {
                let _ = write!(html, "<th>{}</th>", escape_html(cell));
            }
            html.push_str("</tr>\n      </thead>\n      <tbody>\n");
            for row in &grid[1..] {
                html.push_str("        <tr>");
                for cell in row {
                    let _ = write!(html, "<td>{}</td>", escape_html(cell));
                }
                html.push_str("</tr>\n");
            }
            html.push_str("      </tbody>\n    </table>\n");
        }

        html.push_str("  </div>\n");
    }

    html.push_str("</body>\n</html>\n");
    html
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::PageResult;
    use chrono::Utc;
    use std::time::Duration;

    fn sample_doc(confidence: u8) -> ProcessedDocument {
        ProcessedDocument {
            file_name: "laudo <1>.png".to_string(),
            pages: vec![PageResult::new(1, "texto & mais", f64::from(confidence))],
            overall_confidence: confidence,
            total_pages: 1,
            processed_at: Utc::now(),
            processing_time: Duration::from_secs(1),
            document_type: None,
            detected_language: None,
            summary: None,
            exports: None,
        }
    }

    #[test]
    fn test_badge_classes() {
        assert!(export_html(&sample_doc(95)).contains("confidence-high"));
        assert!(export_html(&sample_doc(75)).contains("confidence-medium"));
        assert!(export_html(&sample_doc(50)).contains("confidence-low"));
    }

    #[test]
    fn test_html_escapes_content() {
        let html = export_html(&sample_doc(80));
        assert!(html.contains("laudo &lt;1&gt;.png"));
        assert!(html.contains("texto &amp; mais"));
    }

    #[test]
    fn test_table_renders_header_and_body() {
        let mut doc = sample_doc(90);
        doc.pages[0].set_table(Some(vec![
            vec!["Nome".to_string(), "Idade".to_string()],
            vec!["Ana".to_string(), "30".to_string()],
        ]));
        let html = export_html(&doc);
        assert!(html.contains("<th>Nome</th>"));
        assert!(html.contains("<td>Ana</td>"));
    }
}
