//! Correction service configuration.

use std::env;

use crate::CorrectionError;

const API_KEY_VAR: &str = "SCANDOC_AI_API_KEY";
const ENDPOINT_VAR: &str = "SCANDOC_AI_ENDPOINT";
const MODEL_VAR: &str = "SCANDOC_AI_MODEL";

const DEFAULT_ENDPOINT: &str = "https://api.openai.com/v1";
const DEFAULT_MODEL: &str = "gpt-4o-mini";
const DEFAULT_TIMEOUT_SECS: u64 = 120;

/// Configuration for the correction client.
#[derive(Debug, Clone)]
pub struct CorrectionConfig {
    /// Base URL of the OpenAI-compatible API
    pub endpoint: String,
    /// Bearer token for the API
    pub api_key: String,
    /// Chat model used for correction
    pub model: String,
    /// Request timeout in seconds
    pub timeout_secs: u64,
}

impl CorrectionConfig {
    /// Read the configuration from the environment.
    ///
    /// `SCANDOC_AI_API_KEY` is required; `SCANDOC_AI_ENDPOINT` and
    /// `SCANDOC_AI_MODEL` fall back to OpenAI defaults.
    ///
    /// # Errors
    /// Returns [`CorrectionError::MissingApiKey`] when the key is unset.
    pub fn from_env() -> Result<Self, CorrectionError> {
        let api_key =
            env::var(API_KEY_VAR).map_err(|_| CorrectionError::MissingApiKey(API_KEY_VAR))?;
        let endpoint = env::var(ENDPOINT_VAR).unwrap_or_else(|_| DEFAULT_ENDPOINT.to_string());
        let model = env::var(MODEL_VAR).unwrap_or_else(|_| DEFAULT_MODEL.to_string());

        Ok(Self {
            endpoint,
            api_key,
            model,
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    #[test]
    #[serial]
    fn test_from_env_requires_api_key() {
        let original = env::var(API_KEY_VAR).ok();
        env::remove_var(API_KEY_VAR);

        let result = CorrectionConfig::from_env();
        assert!(matches!(result, Err(CorrectionError::MissingApiKey(_))));

        if let Some(key) = original {
            env::set_var(API_KEY_VAR, key);
        }
    }

    #[test]
    #[serial]
    fn test_from_env_defaults() {
        env::set_var(API_KEY_VAR, "test-key");
        env::remove_var(ENDPOINT_VAR);
        env::remove_var(MODEL_VAR);

        let config = CorrectionConfig::from_env().unwrap();
        assert_eq!(config.api_key, "test-key");
        assert_eq!(config.endpoint, DEFAULT_ENDPOINT);
        assert_eq!(config.model, DEFAULT_MODEL);
        assert_eq!(config.timeout_secs, DEFAULT_TIMEOUT_SECS);

        env::remove_var(API_KEY_VAR);
    }

    #[test]
    #[serial]
    fn test_from_env_overrides() {
        env::set_var(API_KEY_VAR, "test-key");
        env::set_var(ENDPOINT_VAR, "https://gateway.example.com/v1");
        env::set_var(MODEL_VAR, "custom-model");

        let config = CorrectionConfig::from_env().unwrap();
        assert_eq!(config.endpoint, "https://gateway.example.com/v1");
        assert_eq!(config.model, "custom-model");

        env::remove_var(API_KEY_VAR);
        env::remove_var(ENDPOINT_VAR);
        env::remove_var(MODEL_VAR);
    }
}
