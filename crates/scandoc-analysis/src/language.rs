//! Keyword-frequency language detection.
//!
//! Three fixed lists of common function words, scored with the same
//! substring-containment semantics as the document classifier. Portuguese
//! is favored on ties and is the default for empty or ambiguous text.

use scandoc_core::Language;

const PT_INDICATORS: &[&str] = &[
    "ação",
    "não",
    "são",
    "está",
    "então",
    "também",
    "muito",
    "mais",
    "como",
    "será",
    "português",
    "informação",
];

const EN_INDICATORS: &[&str] = &[
    "the",
    "and",
    "this",
    "that",
    "with",
    "from",
    "have",
    "will",
    "information",
    "company",
];

const ES_INDICATORS: &[&str] = &[
    "que",
    "con",
    "para",
    "está",
    "como",
    "más",
    "también",
    "información",
    "español",
];

fn count_matches(text: &str, indicators: &[&str]) -> usize {
    indicators
        .iter()
        .filter(|indicator| text.contains(*indicator))
        .count()
}

/// Detect the dominant language of the given text.
///
/// Decision order favors pt-BR: it wins when its score is at least both
/// others; English wins when strictly above Portuguese and at least
/// Spanish; Spanish only wins when strictly above both. Never fails.
#[must_use = "returns the detected language without using it"]
pub fn detect_language(text: &str) -> Language {
    let lower = text.to_lowercase();

    let pt = count_matches(&lower, PT_INDICATORS);
    let en = count_matches(&lower, EN_INDICATORS);
    let es = count_matches(&lower, ES_INDICATORS);

    if pt >= en && pt >= es {
        Language::PtBr
    } else if en > pt && en >= es {
        Language::En
    } else if es > pt && es > en {
        Language::Es
    } else {
        Language::PtBr
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_portuguese_text() {
        let lang = detect_language("Esta informação não está completa, será revista também.");
        assert_eq!(lang, Language::PtBr);
    }

    #[test]
    fn test_english_text() {
        let lang = detect_language("The company will share this information with partners.");
        assert_eq!(lang, Language::En);
    }

    #[test]
    fn test_spanish_text() {
        let lang = detect_language("El documento en español que presentamos con más detalle para el cliente.");
        assert_eq!(lang, Language::Es);
    }

    #[test]
    fn test_empty_defaults_to_portuguese() {
        assert_eq!(detect_language(""), Language::PtBr);
        assert_eq!(detect_language("12345 67890"), Language::PtBr);
    }

    #[test]
    fn test_tie_favors_portuguese() {
        // "como" and "está" appear in both the pt and es lists.
        assert_eq!(detect_language("como está"), Language::PtBr);
    }

    #[test]
    fn test_detection_is_case_insensitive() {
        assert_eq!(
            detect_language("THE COMPANY WILL HAVE THIS INFORMATION"),
            Language::En
        );
    }
}
