//! Error handling types for cellgen.
//!
//! Every failure a public operation can observe is represented here; the
//! manager converts these into its uniform success/result/error shapes and
//! never lets them propagate as a panic.

use thiserror::Error;

/// Errors surfaced by the Gemini client boundary.
#[derive(Debug, Error)]
pub enum GeminiError {
    /// Configuration error (missing credential, bad client construction)
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// HTTP transport error
    #[error("HTTP error: {0}")]
    Http(String),

    /// API returned an error response
    #[error("API error {code}: {message}")]
    Api {
        /// HTTP status code
        code: u16,
        /// Error message from the API
        message: String,
    },

    /// JSON serialization/deserialization error
    #[error("JSON error: {0}")]
    Json(String),

    /// The API answered but carried no usable text
    #[error("Empty response from Gemini API")]
    EmptyResponse,
}

impl GeminiError {
    /// Construct an API error from a status code and message.
    pub fn api_error(code: u16, message: impl Into<String>) -> Self {
        Self::Api {
            code,
            message: message.into(),
        }
    }
}

// From implementations
impl From<reqwest::Error> for GeminiError {
    fn from(err: reqwest::Error) -> Self {
        Self::Http(err.to_string())
    }
}

impl From<serde_json::Error> for GeminiError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_error_display() {
        let err = GeminiError::api_error(429, "quota exceeded");
        assert_eq!(err.to_string(), "API error 429: quota exceeded");
    }

    #[test]
    fn test_from_serde_json_error() {
        let json_err = serde_json::from_str::<serde_json::Value>("invalid json").unwrap_err();
        let err: GeminiError = json_err.into();
        assert!(matches!(err, GeminiError::Json(_)));
    }
}
