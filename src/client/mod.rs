//! Gemini client layer (configuration and HTTP transport).

pub mod config;
pub mod http;

pub use config::{DEFAULT_BASE_URL, DEFAULT_TIMEOUT_SECS, GeminiConfig};
pub use http::GeminiClient;
