//! Gemini HTTP client.
//!
//! One [`GeminiClient`] is bound to exactly one (credential, model, base URL)
//! triple; changing any of them means constructing a new client. Each
//! generation call is a single request with a single terminal outcome — no
//! retries, no streaming.

use std::time::Duration;

use reqwest::Client as HttpClient;

use super::config::GeminiConfig;
use crate::error::GeminiError;
use crate::protocol::{
    ApiErrorBody, GenerateContentRequest, GenerateContentResponse, GenerationConfig,
    build_gemini_headers,
};

/// Client handle for the Gemini generateContent API.
#[derive(Debug, Clone)]
pub struct GeminiClient {
    http_client: HttpClient,
    config: GeminiConfig,
}

impl GeminiClient {
    /// Create a new client from the given configuration.
    ///
    /// Fails when no credential is configured or the HTTP client cannot be
    /// constructed.
    pub fn new(config: GeminiConfig) -> Result<Self, GeminiError> {
        if !config.has_api_key() {
            return Err(GeminiError::Configuration(
                "API key is required for Gemini".to_string(),
            ));
        }

        let http_client = HttpClient::builder()
            .timeout(Duration::from_secs(config.timeout))
            .build()
            .map_err(|e| {
                GeminiError::Configuration(format!("Failed to create HTTP client: {e}"))
            })?;

        Ok(Self {
            http_client,
            config,
        })
    }

    /// Model id this client is bound to.
    pub fn model(&self) -> &str {
        &self.config.model
    }

    /// URL of the generateContent endpoint for the bound model.
    fn generate_url(&self) -> String {
        let model = &self.config.model;
        if model.starts_with("models/") {
            format!("{}/{model}:generateContent", self.config.base_url)
        } else {
            format!("{}/models/{model}:generateContent", self.config.base_url)
        }
    }

    /// Issue one generation request and return the decoded response.
    pub async fn generate(
        &self,
        prompt: &str,
        generation_config: GenerationConfig,
    ) -> Result<GenerateContentResponse, GeminiError> {
        let headers = build_gemini_headers(&self.config.api_key)?;
        let request = GenerateContentRequest::single_turn(prompt, generation_config);

        tracing::debug!(
            model = %self.config.model,
            prompt_len = prompt.len(),
            "issuing generateContent request"
        );

        let response = self
            .http_client
            .post(self.generate_url())
            .headers(headers)
            .json(&request)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            let message = serde_json::from_str::<ApiErrorBody>(&body)
                .map(|b| b.error.message)
                .unwrap_or(body);
            return Err(GeminiError::api_error(status.as_u16(), message));
        }

        let decoded = response
            .json::<GenerateContentResponse>()
            .await
            .map_err(|e| GeminiError::Json(e.to_string()))?;

        Ok(decoded)
    }

    /// Issue one generation request and return the trimmed text.
    ///
    /// A response without retrievable text, or with only whitespace, maps to
    /// [`GeminiError::EmptyResponse`].
    pub async fn generate_text(
        &self,
        prompt: &str,
        generation_config: GenerationConfig,
    ) -> Result<String, GeminiError> {
        let response = self.generate(prompt, generation_config).await?;

        match response.primary_text() {
            Some(text) if !text.trim().is_empty() => Ok(text.trim().to_string()),
            _ => Err(GeminiError::EmptyResponse),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_requires_api_key() {
        let result = GeminiClient::new(GeminiConfig::default());
        assert!(matches!(result, Err(GeminiError::Configuration(_))));
    }

    #[test]
    fn test_generate_url_with_resource_id() {
        let client =
            GeminiClient::new(GeminiConfig::new("k").with_model("models/gemini-2.0-flash"))
                .unwrap();
        assert_eq!(
            client.generate_url(),
            "https://generativelanguage.googleapis.com/v1beta/models/gemini-2.0-flash:generateContent"
        );
    }

    #[test]
    fn test_generate_url_with_bare_model_name() {
        let client = GeminiClient::new(GeminiConfig::new("k").with_model("gemini-2.5-pro")).unwrap();
        assert_eq!(
            client.generate_url(),
            "https://generativelanguage.googleapis.com/v1beta/models/gemini-2.5-pro:generateContent"
        );
    }
}
