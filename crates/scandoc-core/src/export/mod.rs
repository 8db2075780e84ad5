//! Pure, deterministic export serializers for [`crate::ProcessedDocument`].
//!
//! Four formats are produced: plain text (page-delimited with a confidence
//! header per page), CSV (one section per page with a detected table), JSON
//! (lossless for page texts, confidences and table grids) and HTML (styled
//! per-page sections with a confidence badge).

mod csv;
mod html;
mod json;
mod text;

pub use self::csv::export_csv;
pub use self::html::export_html;
pub use self::json::{export_json, import_json, JsonDocument, JsonExport, JsonPage};
pub use self::text::export_txt;

/// Badge class for a confidence value: >=90 "high", >=70 "medium", else "low".
#[inline]
#[must_use = "returns the badge class without using it"]
pub const fn confidence_badge(confidence: u8) -> &'static str {
    if confidence >= 90 {
        "high"
    } else if confidence >= 70 {
        "medium"
    } else {
        "low"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_confidence_badge_thresholds() {
        assert_eq!(confidence_badge(100), "high");
        assert_eq!(confidence_badge(90), "high");
        assert_eq!(confidence_badge(89), "medium");
        assert_eq!(confidence_badge(70), "medium");
        assert_eq!(confidence_badge(69), "low");
        assert_eq!(confidence_badge(0), "low");
    }
}
