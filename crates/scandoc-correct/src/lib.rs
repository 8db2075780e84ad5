//! AI-assisted correction of OCR'd text.
//!
//! Sends raw page text to an OpenAI-compatible chat endpoint and returns
//! a corrected version. Correction is best-effort: callers are expected
//! to fall back to the raw text on any error. Rate-limit and credit
//! exhaustion conditions are classified into dedicated error variants so
//! callers can report them distinctly.

mod client;
mod config;

pub use client::CorrectionClient;
pub use config::CorrectionConfig;

/// Errors from the correction service.
#[derive(Debug, thiserror::Error)]
pub enum CorrectionError {
    /// Provider rejected the request because of rate limiting
    #[error("rate limit exceeded, try again shortly")]
    RateLimited,

    /// Provider account has no credits left
    #[error("AI credits exhausted")]
    CreditsExhausted,

    /// Any other provider-reported failure
    #[error("correction provider error: {0}")]
    Provider(String),

    /// API key missing from the environment
    #[error("correction API key not configured (set {0})")]
    MissingApiKey(&'static str),

    /// Transport-level failure
    #[error("correction request failed: {0}")]
    Http(#[from] reqwest::Error),
}

/// Classify a provider-reported error message.
///
/// Rate-limit and credit conditions are recognized by substring so that
/// upstream gateways wrapping the provider's message still classify.
#[must_use = "returns the classified error without using it"]
pub fn classify_provider_error(message: &str) -> CorrectionError {
    if message.contains("Rate limit") {
        CorrectionError::RateLimited
    } else if message.contains("credits") {
        CorrectionError::CreditsExhausted
    } else {
        CorrectionError::Provider(message.to_string())
    }
}
