//! Gemini `v1beta` wire types.
//!
//! Only the slice of the generateContent surface this crate actually sends
//! and reads is modeled here; unknown response fields are ignored by serde.

use serde::{Deserialize, Serialize};

/// Gemini Generate Content Request
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerateContentRequest {
    /// The content of the current conversation with the model.
    pub contents: Vec<Content>,
    /// Configuration options for model generation and outputs.
    #[serde(skip_serializing_if = "Option::is_none", rename = "generationConfig")]
    pub generation_config: Option<GenerationConfig>,
}

impl GenerateContentRequest {
    /// Single-turn user request with the given prompt and generation config.
    pub fn single_turn(prompt: impl Into<String>, config: GenerationConfig) -> Self {
        Self {
            contents: vec![Content::user(prompt)],
            generation_config: Some(config),
        }
    }
}

/// One conversation turn.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Content {
    /// The producer of the content ("user" or "model").
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
    /// Ordered parts that make up the content.
    #[serde(default)]
    pub parts: Vec<Part>,
}

impl Content {
    /// A user turn holding one text part.
    pub fn user(text: impl Into<String>) -> Self {
        Self {
            role: Some("user".to_string()),
            parts: vec![Part { text: text.into() }],
        }
    }
}

/// A single content part. Text-only; this crate sends no media.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Part {
    /// Raw text.
    pub text: String,
}

/// Configuration options for model generation and outputs.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GenerationConfig {
    /// Controls the randomness of the output.
    /// Use f64 to preserve decimal representation in JSON.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub temperature: Option<f64>,
    /// The maximum number of tokens to include in a candidate.
    #[serde(skip_serializing_if = "Option::is_none", rename = "maxOutputTokens")]
    pub max_output_tokens: Option<i32>,
}

impl GenerationConfig {
    /// Config with both knobs this crate exposes.
    pub fn new(temperature: f64, max_output_tokens: i32) -> Self {
        Self {
            temperature: Some(temperature),
            max_output_tokens: Some(max_output_tokens),
        }
    }
}

/// Gemini Generate Content Response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerateContentResponse {
    /// Candidate responses from the model.
    #[serde(default)]
    pub candidates: Vec<Candidate>,
    /// Output only. The model version used to generate the response.
    #[serde(skip_serializing_if = "Option::is_none", rename = "modelVersion")]
    pub model_version: Option<String>,
}

impl GenerateContentResponse {
    /// Extract the first candidate's concatenated text, if any is present.
    ///
    /// This is the explicit capability check that replaces attribute probing:
    /// `None` means the response carried no retrievable text at all, and an
    /// empty string means it was present but blank. Callers treat both as an
    /// empty response.
    pub fn primary_text(&self) -> Option<String> {
        let candidate = self.candidates.first()?;
        let content = candidate.content.as_ref()?;
        if content.parts.is_empty() {
            return None;
        }
        Some(
            content
                .parts
                .iter()
                .map(|p| p.text.as_str())
                .collect::<String>(),
        )
    }
}

/// One generated candidate.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Candidate {
    /// Generated content. Absent when generation was blocked.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<Content>,
    /// The reason the model stopped generating tokens.
    #[serde(skip_serializing_if = "Option::is_none", rename = "finishReason")]
    pub finish_reason: Option<String>,
}

/// Error envelope returned by the API on non-2xx responses.
#[derive(Debug, Clone, Deserialize)]
pub struct ApiErrorBody {
    /// Error details.
    pub error: ApiErrorDetail,
}

/// Error detail payload.
#[derive(Debug, Clone, Deserialize)]
pub struct ApiErrorDetail {
    /// Numeric error code (mirrors the HTTP status).
    #[serde(default)]
    pub code: Option<i32>,
    /// Human-readable message.
    pub message: String,
    /// Canonical status string (e.g. "INVALID_ARGUMENT").
    #[serde(default)]
    pub status: Option<String>,
}
