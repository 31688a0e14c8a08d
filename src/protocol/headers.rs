//! Gemini HTTP header helpers.
//!
//! Behavior:
//! - Always include `Content-Type: application/json`
//! - Inject `x-goog-api-key` only when the key is non-empty

use reqwest::header::{CONTENT_TYPE, HeaderMap, HeaderValue};
use secrecy::{ExposeSecret, SecretString};

use crate::error::GeminiError;

pub fn build_gemini_headers(api_key: &SecretString) -> Result<HeaderMap, GeminiError> {
    let mut headers = HeaderMap::new();
    headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

    let key = api_key.expose_secret();
    if !key.is_empty() {
        let mut value = HeaderValue::from_str(key)
            .map_err(|e| GeminiError::Configuration(format!("Invalid API key value: {e}")))?;
        value.set_sensitive(true);
        headers.insert("x-goog-api-key", value);
    }

    Ok(headers)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn build_gemini_headers_injects_api_key() {
        let headers = build_gemini_headers(&SecretString::from("k".to_string())).unwrap();
        assert_eq!(
            headers.get("x-goog-api-key").and_then(|v| v.to_str().ok()),
            Some("k")
        );
        assert_eq!(
            headers.get(CONTENT_TYPE).and_then(|v| v.to_str().ok()),
            Some("application/json")
        );
    }

    #[test]
    fn build_gemini_headers_skips_empty_key() {
        let headers = build_gemini_headers(&SecretString::from(String::new())).unwrap();
        assert!(headers.get("x-goog-api-key").is_none());
    }

    #[test]
    fn build_gemini_headers_rejects_invalid_key() {
        let result = build_gemini_headers(&SecretString::from("bad\nkey".to_string()));
        assert!(matches!(result, Err(GeminiError::Configuration(_))));
    }
}
