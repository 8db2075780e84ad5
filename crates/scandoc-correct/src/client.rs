//! OpenAI-compatible chat client for OCR text correction.

use serde::{Deserialize, Serialize};

use crate::{classify_provider_error, CorrectionConfig, CorrectionError};

const SYSTEM_PROMPT: &str = "Você é um assistente de correção de textos extraídos por OCR. \
Corrija erros de reconhecimento (caracteres trocados, palavras quebradas, acentuação), \
preservando a formatação, os números e os nomes próprios do texto original. \
Responda apenas com o texto corrigido, sem comentários.";

/// Chat API request
#[derive(Debug, Clone, Serialize)]
struct ChatRequest {
    model: String,
    messages: Vec<Message>,
    temperature: f32,
}

/// Chat message
#[derive(Debug, Clone, Serialize)]
struct Message {
    role: String,
    content: String,
}

/// Chat API response
#[derive(Debug, Clone, Deserialize)]
struct ChatResponse {
    #[serde(default)]
    choices: Vec<Choice>,
}

/// Response choice
#[derive(Debug, Clone, Deserialize)]
struct Choice {
    message: ResponseMessage,
}

/// Response message (only the text content is used)
#[derive(Debug, Clone, Deserialize)]
struct ResponseMessage {
    content: Option<String>,
}

/// Error payload some providers return as a JSON body.
#[derive(Debug, Clone, Deserialize)]
struct ErrorBody {
    error: ErrorDetail,
}

#[derive(Debug, Clone, Deserialize)]
struct ErrorDetail {
    message: String,
}

/// Client for the correction endpoint.
#[derive(Debug, Clone)]
pub struct CorrectionClient {
    config: CorrectionConfig,
    http_client: reqwest::Client,
}

impl CorrectionClient {
    /// Build a client from a configuration.
    ///
    /// # Errors
    /// Returns an error if the HTTP client cannot be constructed.
    pub fn new(config: CorrectionConfig) -> Result<Self, CorrectionError> {
        let http_client = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self {
            config,
            http_client,
        })
    }

    /// Build a client from the environment.
    ///
    /// # Errors
    /// Returns [`CorrectionError::MissingApiKey`] when the key is unset.
    pub fn from_env() -> Result<Self, CorrectionError> {
        Self::new(CorrectionConfig::from_env()?)
    }

    /// Correct OCR'd page text.
    ///
    /// Returns the corrected text, or the input unchanged when the
    /// provider response carries no content.
    ///
    /// # Errors
    /// Returns a classified [`CorrectionError`] for rate-limit, credit
    /// and other provider failures.
    pub async fn correct_text(&self, text: &str) -> Result<String, CorrectionError> {
        let request = ChatRequest {
            model: self.config.model.clone(),
            messages: vec![
                Message {
                    role: "system".to_string(),
                    content: SYSTEM_PROMPT.to_string(),
                },
                Message {
                    role: "user".to_string(),
                    content: text.to_string(),
                },
            ],
            temperature: 0.0,
        };

        let response = self
            .http_client
            .post(format!("{}/chat/completions", self.config.endpoint))
            .header("Authorization", format!("Bearer {}", self.config.api_key))
            .header("Content-Type", "application/json")
            .json(&request)
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            return Err(error_for_status(status, &body));
        }

        let chat_response: ChatResponse = serde_json::from_str(&body)
            .map_err(|e| CorrectionError::Provider(format!("malformed response: {e}")))?;

        let content = chat_response
            .choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message.content);

        match content {
            Some(corrected) if !corrected.trim().is_empty() => Ok(corrected),
            _ => {
                log::warn!("correction response carried no content, keeping raw text");
                Ok(text.to_string())
            }
        }
    }
}

/// Map a non-success HTTP status and body to a classified error.
///
/// 429 and 402 classify from the status alone; other statuses classify
/// from the provider's message body.
fn error_for_status(status: reqwest::StatusCode, body: &str) -> CorrectionError {
    match status.as_u16() {
        429 => CorrectionError::RateLimited,
        402 => CorrectionError::CreditsExhausted,
        _ => {
            let message = serde_json::from_str::<ErrorBody>(body)
                .map(|parsed| parsed.error.message)
                .unwrap_or_else(|_| format!("status {status}: {body}"));
            classify_provider_error(&message)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_429_maps_to_rate_limited() {
        let err = error_for_status(reqwest::StatusCode::TOO_MANY_REQUESTS, "{}");
        assert!(matches!(err, CorrectionError::RateLimited));
    }

    #[test]
    fn test_status_402_maps_to_credits_exhausted() {
        let err = error_for_status(reqwest::StatusCode::PAYMENT_REQUIRED, "{}");
        assert!(matches!(err, CorrectionError::CreditsExhausted));
    }

    #[test]
    fn test_error_body_message_is_classified() {
        let body = r#"{"error": {"message": "Rate limit exceeded, retry later"}}"#;
        let err = error_for_status(reqwest::StatusCode::INTERNAL_SERVER_ERROR, body);
        assert!(matches!(err, CorrectionError::RateLimited));
    }

    #[test]
    fn test_unparseable_body_falls_back_to_status() {
        let err = error_for_status(reqwest::StatusCode::BAD_GATEWAY, "upstream down");
        match err {
            CorrectionError::Provider(msg) => {
                assert!(msg.contains("502"));
                assert!(msg.contains("upstream down"));
            }
            other => panic!("unexpected classification: {other:?}"),
        }
    }

    #[test]
    fn test_chat_request_serializes_in_wire_shape() {
        let request = ChatRequest {
            model: "gpt-4o-mini".to_string(),
            messages: vec![Message {
                role: "user".to_string(),
                content: "olá".to_string(),
            }],
            temperature: 0.0,
        };
        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json["model"], "gpt-4o-mini");
        assert_eq!(json["messages"][0]["role"], "user");
        assert_eq!(json["messages"][0]["content"], "olá");
    }

    #[test]
    fn test_response_without_content_detected() {
        let response: ChatResponse =
            serde_json::from_str(r#"{"choices": [{"message": {}}]}"#).unwrap();
        assert!(response.choices[0].message.content.is_none());
    }
}
