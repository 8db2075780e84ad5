//! Document type classification labels.
//!
//! [`DocumentType`] is a closed set of labels describing the purpose of a
//! scanned document. [`DocumentTypeInfo`] pairs a type with the classifier
//! confidence and the fixed display label/icon for that type.

use serde::{Deserialize, Serialize};

/// Closed-set label classifying the scanned document's purpose.
///
/// `Letter`, `Form` and `Other` carry no keyword list in the classifier and
/// are never selected by scoring; `Other` is only reachable as the
/// low-confidence fallback.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DocumentType {
    /// Court filing or legal petition
    LegalPetition,
    /// Contract or service agreement
    Contract,
    /// Fiscal invoice (NF-e/DANFE)
    Invoice,
    /// Curriculum vitae
    Resume,
    /// Identity document (RG, CPF, certidão)
    IdDocument,
    /// Payment receipt
    Receipt,
    /// Analytical report
    Report,
    /// Letter or official correspondence
    Letter,
    /// Blank or filled form
    Form,
    /// Payslip (contracheque/holerite)
    Payslip,
    /// Employee personnel file
    PersonnelFile,
    /// Timecard / work-hours record
    Timecard,
    /// Unrecognized document (low-confidence fallback)
    #[default]
    Other,
}

impl DocumentType {
    /// Fixed display label for this type.
    #[inline]
    #[must_use = "returns the display label without using it"]
    pub const fn label(self) -> &'static str {
        match self {
            Self::LegalPetition => "Petição Jurídica",
            Self::Contract => "Contrato",
            Self::Invoice => "Nota Fiscal",
            Self::Resume => "Currículo",
            Self::IdDocument => "Documento de Identidade",
            Self::Receipt => "Recibo",
            Self::Report => "Relatório",
            Self::Letter => "Carta/Ofício",
            Self::Form => "Formulário",
            Self::Payslip => "Contracheque",
            Self::PersonnelFile => "Ficha de Pessoal",
            Self::Timecard => "Cartão Ponto",
            Self::Other => "Documento Geral",
        }
    }

    /// Fixed icon glyph for this type.
    #[inline]
    #[must_use = "returns the icon glyph without using it"]
    pub const fn icon(self) -> &'static str {
        match self {
            Self::LegalPetition => "⚖️",
            Self::Contract => "📝",
            Self::Invoice => "🧾",
            Self::Resume => "👤",
            Self::IdDocument => "🪪",
            Self::Receipt => "🧾",
            Self::Report => "📊",
            Self::Letter => "✉️",
            Self::Form => "📋",
            Self::Payslip => "💰",
            Self::PersonnelFile => "📁",
            Self::Timecard => "⏰",
            Self::Other => "📄",
        }
    }
}

impl std::fmt::Display for DocumentType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let tag = match self {
            Self::LegalPetition => "legal_petition",
            Self::Contract => "contract",
            Self::Invoice => "invoice",
            Self::Resume => "resume",
            Self::IdDocument => "id_document",
            Self::Receipt => "receipt",
            Self::Report => "report",
            Self::Letter => "letter",
            Self::Form => "form",
            Self::Payslip => "payslip",
            Self::PersonnelFile => "personnel_file",
            Self::Timecard => "timecard",
            Self::Other => "other",
        };
        write!(f, "{tag}")
    }
}

impl std::str::FromStr for DocumentType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "legal_petition" => Ok(Self::LegalPetition),
            "contract" => Ok(Self::Contract),
            "invoice" => Ok(Self::Invoice),
            "resume" => Ok(Self::Resume),
            "id_document" => Ok(Self::IdDocument),
            "receipt" => Ok(Self::Receipt),
            "report" => Ok(Self::Report),
            "letter" => Ok(Self::Letter),
            "form" => Ok(Self::Form),
            "payslip" => Ok(Self::Payslip),
            "personnel_file" => Ok(Self::PersonnelFile),
            "timecard" => Ok(Self::Timecard),
            "other" => Ok(Self::Other),
            _ => Err(format!("unknown document type: '{s}'")),
        }
    }
}

/// Classification result: type, confidence and display attributes.
///
/// Derived from the document text; never persisted independently of the
/// owning document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocumentTypeInfo {
    /// Classified document type
    #[serde(rename = "type")]
    pub kind: DocumentType,
    /// Classifier confidence (0-100)
    pub confidence: u8,
    /// Display label for the type
    pub label: String,
    /// Icon glyph for the type
    pub icon: String,
}

impl DocumentTypeInfo {
    /// Build a classification result, filling label and icon from the
    /// fixed per-type lookup.
    #[inline]
    #[must_use = "creates classification info without using it"]
    pub fn new(kind: DocumentType, confidence: u8) -> Self {
        Self {
            kind,
            confidence,
            label: kind.label().to_string(),
            icon: kind.icon().to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_labels_and_icons() {
        assert_eq!(DocumentType::Contract.label(), "Contrato");
        assert_eq!(DocumentType::Invoice.label(), "Nota Fiscal");
        assert_eq!(DocumentType::Payslip.label(), "Contracheque");
        assert_eq!(DocumentType::Other.label(), "Documento Geral");
        assert_eq!(DocumentType::Timecard.icon(), "⏰");
        assert_eq!(DocumentType::Other.icon(), "📄");
    }

    #[test]
    fn test_display_tags() {
        assert_eq!(DocumentType::LegalPetition.to_string(), "legal_petition");
        assert_eq!(DocumentType::PersonnelFile.to_string(), "personnel_file");
        assert_eq!(DocumentType::Other.to_string(), "other");
    }

    #[test]
    fn test_from_str_roundtrip() {
        for kind in [
            DocumentType::LegalPetition,
            DocumentType::Contract,
            DocumentType::Invoice,
            DocumentType::Resume,
            DocumentType::IdDocument,
            DocumentType::Receipt,
            DocumentType::Report,
            DocumentType::Letter,
            DocumentType::Form,
            DocumentType::Payslip,
            DocumentType::PersonnelFile,
            DocumentType::Timecard,
            DocumentType::Other,
        ] {
            let tag = kind.to_string();
            let parsed = DocumentType::from_str(&tag).unwrap();
            assert_eq!(kind, parsed, "roundtrip failed for {tag}");
        }
        assert!(DocumentType::from_str("spreadsheet").is_err());
    }

    #[test]
    fn test_info_fills_display_attributes() {
        let info = DocumentTypeInfo::new(DocumentType::Contract, 45);
        assert_eq!(info.kind, DocumentType::Contract);
        assert_eq!(info.confidence, 45);
        assert_eq!(info.label, "Contrato");
        assert_eq!(info.icon, "📝");
    }

    #[test]
    fn test_serde_tag_names() {
        let info = DocumentTypeInfo::new(DocumentType::IdDocument, 60);
        let json = serde_json::to_string(&info).unwrap();
        assert!(json.contains("\"type\":\"id_document\""));
    }
}
