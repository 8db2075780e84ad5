//! Language tags recognized by the language detector.

use serde::{Deserialize, Serialize};

/// Dominant language of a document or page.
///
/// The detector only distinguishes Brazilian Portuguese, English and
/// Spanish; Portuguese is the default for empty or ambiguous text.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Language {
    /// Brazilian Portuguese (default)
    #[default]
    #[serde(rename = "pt-BR")]
    PtBr,
    /// English
    #[serde(rename = "en")]
    En,
    /// Spanish
    #[serde(rename = "es")]
    Es,
}

impl Language {
    /// BCP-47 style tag for this language.
    #[inline]
    #[must_use = "returns the language tag without using it"]
    pub const fn tag(self) -> &'static str {
        match self {
            Self::PtBr => "pt-BR",
            Self::En => "en",
            Self::Es => "es",
        }
    }
}

impl std::fmt::Display for Language {
    #[inline]
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.tag())
    }
}

impl std::str::FromStr for Language {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "pt-BR" | "pt-br" | "pt" => Ok(Self::PtBr),
            "en" => Ok(Self::En),
            "es" => Ok(Self::Es),
            _ => Err(format!("unknown language tag: '{s}' (expected: pt-BR, en, es)")),
        }
    }
}
