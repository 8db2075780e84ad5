//! Keyword-frequency document classification.
//!
//! Each candidate type carries a fixed list of Portuguese keywords; a
//! keyword scores at most one point per document via literal substring
//! containment, no tokenization or stemming: the confidence thresholds
//! are calibrated against substring counts. The candidate order is fixed
//! and ties break to the first-seen candidate, so classification is fully
//! reproducible.

use scandoc_core::{DocumentType, DocumentTypeInfo};

const LEGAL_PETITION_KEYWORDS: &[&str] = &[
    "excelentíssimo",
    "meritíssimo",
    "comarca",
    "processo",
    "autor",
    "réu",
    "petição",
    "vara",
    "juízo",
    "defesa",
    "ação",
    "sentença",
];

const CONTRACT_KEYWORDS: &[&str] = &[
    "contratante",
    "contratado",
    "cláusula",
    "partes",
    "acordo",
    "vigência",
    "rescisão",
    "testemunhas",
    "assinam",
];

const INVOICE_KEYWORDS: &[&str] = &[
    "nota fiscal",
    "nf-e",
    "cnpj",
    "valor total",
    "impostos",
    "icms",
    "ipi",
    "emitente",
    "destinatário",
    "danfe",
];

const RESUME_KEYWORDS: &[&str] = &[
    "currículo",
    "experiência profissional",
    "formação acadêmica",
    "habilidades",
    "objetivo",
    "qualificações",
    "telefone",
    "e-mail",
];

const ID_DOCUMENT_KEYWORDS: &[&str] = &[
    "rg",
    "cpf",
    "carteira de identidade",
    "certidão",
    "nascimento",
    "órgão expedidor",
    "data de emissão",
    "nacionalidade",
];

const RECEIPT_KEYWORDS: &[&str] = &[
    "recibo",
    "recebi",
    "valor de",
    "referente",
    "pagamento",
    "quitação",
    "por extenso",
];

const REPORT_KEYWORDS: &[&str] = &[
    "relatório",
    "análise",
    "conclusão",
    "resultados",
    "metodologia",
    "introdução",
    "sumário",
    "referências",
];

const PAYSLIP_KEYWORDS: &[&str] = &[
    "contracheque",
    "holerite",
    "folha de pagamento",
    "salário bruto",
    "salário líquido",
    "descontos",
    "inss",
    "fgts",
    "irrf",
    "vale transporte",
    "vale alimentação",
];

const PERSONNEL_FILE_KEYWORDS: &[&str] = &[
    "ficha",
    "cadastro",
    "dados pessoais",
    "admissão",
    "demissão",
    "cargo",
    "função",
    "departamento",
    "matrícula",
    "colaborador",
];

const TIMECARD_KEYWORDS: &[&str] = &[
    "cartão ponto",
    "registro de ponto",
    "entrada",
    "saída",
    "intervalo",
    "horas trabalhadas",
    "horas extras",
    "banco de horas",
    "jornada",
];

/// Scored candidates in fixed iteration order. Letter, Form and Other
/// carry no keyword list and are never selected by scoring.
const CANDIDATES: &[(DocumentType, &[&str])] = &[
    (DocumentType::LegalPetition, LEGAL_PETITION_KEYWORDS),
    (DocumentType::Contract, CONTRACT_KEYWORDS),
    (DocumentType::Invoice, INVOICE_KEYWORDS),
    (DocumentType::Resume, RESUME_KEYWORDS),
    (DocumentType::IdDocument, ID_DOCUMENT_KEYWORDS),
    (DocumentType::Receipt, RECEIPT_KEYWORDS),
    (DocumentType::Report, REPORT_KEYWORDS),
    (DocumentType::Payslip, PAYSLIP_KEYWORDS),
    (DocumentType::PersonnelFile, PERSONNEL_FILE_KEYWORDS),
    (DocumentType::Timecard, TIMECARD_KEYWORDS),
];

/// Points per keyword match when converting the top score to a confidence.
const SCORE_WEIGHT: usize = 15;
/// Confidence floor
const CONFIDENCE_FLOOR: u8 = 30;
/// Confidence ceiling
const CONFIDENCE_CEILING: u8 = 95;
/// At or below this confidence the classified type falls back to `Other`.
const FALLBACK_THRESHOLD: u8 = 40;

/// Count how many keywords occur as substrings of `text`.
///
/// Each keyword contributes at most 1 regardless of repetition.
fn count_matches(text: &str, keywords: &[&str]) -> usize {
    keywords
        .iter()
        .filter(|keyword| text.contains(*keyword))
        .count()
}

/// Classify the document type of the given text.
///
/// Pure and deterministic: the same text always yields the same type,
/// confidence, label and icon. Never fails; text with no keyword matches
/// classifies as `Other` at the confidence floor.
#[must_use = "returns the classification without using it"]
pub fn classify_document(text: &str) -> DocumentTypeInfo {
    let lower = text.to_lowercase();

    let mut top_type = CANDIDATES[0].0;
    let mut top_score = 0usize;
    for &(candidate, keywords) in CANDIDATES {
        let score = count_matches(&lower, keywords);
        // Strictly greater: ties keep the first-seen candidate.
        if score > top_score {
            top_type = candidate;
            top_score = score;
        }
    }

    // Clamped before narrowing so a large raw score can never truncate.
    let confidence = (top_score * SCORE_WEIGHT)
        .clamp(usize::from(CONFIDENCE_FLOOR), usize::from(CONFIDENCE_CEILING))
        as u8;

    // Low confidence falls back to Other, but the confidence value itself
    // is kept (re-labeled for the fallback type).
    let kind = if confidence > FALLBACK_THRESHOLD {
        top_type
    } else {
        DocumentType::Other
    };

    log::debug!("classified as {kind} ({confidence}%, top score {top_score})");
    DocumentTypeInfo::new(kind, confidence)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_contract_classification() {
        let info = classify_document(
            "O contratante e o contratado firmam o presente instrumento. \
             A cláusula terceira define a vigência do acordo.",
        );
        assert_eq!(info.kind, DocumentType::Contract);
        assert_eq!(info.label, "Contrato");
    }

    #[test]
    fn test_three_matches_score_45() {
        // Exactly three contract keywords and nothing from other lists.
        let info = classify_document("contratante ... cláusula ... vigência");
        assert_eq!(info.kind, DocumentType::Contract);
        assert_eq!(info.confidence, 45);
        assert_eq!(info.label, "Contrato");
        assert_eq!(info.icon, "📝");
    }

    #[test]
    fn test_no_matches_falls_back_to_other_at_floor() {
        let info = classify_document("zzz yyy xxx www");
        assert_eq!(info.kind, DocumentType::Other);
        assert_eq!(info.confidence, 30);
        assert_eq!(info.label, "Documento Geral");
    }

    #[test]
    fn test_low_score_keeps_confidence_but_relabels() {
        // Two matches: confidence 30..=40 range forces Other.
        let info = classify_document("contratante e cláusula");
        assert_eq!(info.confidence, 30);
        assert_eq!(info.kind, DocumentType::Other);
    }

    #[test]
    fn test_confidence_is_capped_at_95() {
        let text = INVOICE_KEYWORDS.join(" ");
        let info = classify_document(&text);
        assert_eq!(info.kind, DocumentType::Invoice);
        assert_eq!(info.confidence, 95);
    }

    #[test]
    fn test_keyword_repetition_scores_once() {
        let repeated = "contracheque ".repeat(50);
        let once = classify_document("contracheque");
        let many = classify_document(&repeated);
        assert_eq!(once.confidence, many.confidence);
    }

    #[test]
    fn test_matching_is_case_insensitive() {
        let info = classify_document("CONTRATANTE, CLÁUSULA, VIGÊNCIA");
        assert_eq!(info.kind, DocumentType::Contract);
        assert_eq!(info.confidence, 45);
    }

    #[test]
    fn test_tie_breaks_to_first_candidate() {
        // Three legal keywords and three payslip keywords; legal petition
        // comes first in the candidate order and wins the tie.
        let info = classify_document("comarca processo sentença inss fgts irrf");
        assert_eq!(info.kind, DocumentType::LegalPetition);
    }

    #[test]
    fn test_classification_is_deterministic() {
        let text = "relatório de análise com conclusão e resultados";
        let a = classify_document(text);
        let b = classify_document(text);
        assert_eq!(a, b);
    }

    #[test]
    fn test_payslip_classification() {
        let info =
            classify_document("holerite: salário bruto, descontos de inss e fgts, salário líquido");
        assert_eq!(info.kind, DocumentType::Payslip);
        assert_eq!(info.label, "Contracheque");
    }

    #[test]
    fn test_timecard_classification() {
        let info = classify_document(
            "registro de ponto: entrada 08:00, saída 17:00, intervalo 12:00, horas trabalhadas 8",
        );
        assert_eq!(info.kind, DocumentType::Timecard);
    }
}
