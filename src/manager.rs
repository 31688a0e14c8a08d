//! Gemini API manager.
//!
//! Owns the credential, the model selection, and the client handle, and
//! mediates all outbound generation calls. Every public operation converts
//! client-layer errors into a uniform shape; nothing panics or propagates
//! past this boundary.
//!
//! The manager assumes one logical caller at a time (`&mut self` on every
//! mutating operation). Hosts that process cells in parallel should create
//! one manager per worker.

use secrecy::SecretString;

use crate::client::{GeminiClient, GeminiConfig};
use crate::error::GeminiError;
use crate::models::{self, ModelDescriptor};
use crate::outcome::CellOutcome;
use crate::prompt::CellRequest;
use crate::protocol::GenerationConfig;

/// Fixed prompt used by the connectivity probe.
const PROBE_PROMPT: &str = "Test connection - respond with just 'OK'";
/// Probe sampling temperature.
const PROBE_TEMPERATURE: f64 = 0.1;
/// Probe output-length cap.
const PROBE_MAX_TOKENS: i32 = 10;

/// Message returned when lazy initialization cannot produce a client.
const NOT_INITIALIZED: &str = "Gemini API client not initialized";

/// Manager for interacting with the Gemini API.
pub struct GeminiManager {
    config: GeminiConfig,
    client: Option<GeminiClient>,
}

impl GeminiManager {
    /// Create a manager from an explicit configuration.
    ///
    /// When the configuration already carries a credential the client handle
    /// is built eagerly; a construction failure is logged and leaves the
    /// handle unset, same as a failed [`initialize`](Self::initialize).
    pub fn new(config: GeminiConfig) -> Self {
        let mut manager = Self {
            config,
            client: None,
        };
        if manager.config.has_api_key() {
            manager.initialize(None);
        }
        manager
    }

    /// Convenience constructor from a bare API key.
    pub fn from_api_key(api_key: impl Into<String>) -> Self {
        Self::new(GeminiConfig::new(api_key))
    }

    /// Initialize (or re-initialize) the client handle.
    ///
    /// A non-empty `api_key` argument overwrites the stored credential.
    /// Returns `false` when no credential is available or the handle could
    /// not be constructed; the failure is logged, never thrown.
    pub fn initialize(&mut self, api_key: Option<&str>) -> bool {
        if let Some(key) = api_key
            && !key.is_empty()
        {
            self.config.api_key = SecretString::from(key.to_string());
        }

        if !self.config.has_api_key() {
            tracing::error!("API key is required for Gemini");
            return false;
        }

        match GeminiClient::new(self.config.clone()) {
            Ok(client) => {
                self.client = Some(client);
                true
            }
            Err(e) => {
                tracing::error!(error = %e, "Failed to initialize Gemini client");
                self.client = None;
                false
            }
        }
    }

    /// Switch the model used for subsequent calls.
    ///
    /// The stored model id always updates. Ids outside the static catalog
    /// are passed through to the API unchanged (its own validation governs
    /// acceptance); the switch only logs a warning for them. When a
    /// credential is present the client handle is eagerly rebuilt; a rebuild
    /// failure is logged and reported as `false`, leaving the previous handle
    /// in place (stale with respect to the new model id). Without a
    /// credential no rebuild is attempted and the switch reports success.
    pub fn set_model(&mut self, model_id: impl Into<String>) -> bool {
        self.config.model = model_id.into();

        if models::find_model(&self.config.model).is_none() {
            tracing::warn!(
                model = %self.config.model,
                "Model id not in the static catalog; passing through to the API"
            );
        }

        if !self.config.has_api_key() {
            return true;
        }

        match GeminiClient::new(self.config.clone()) {
            Ok(client) => {
                self.client = Some(client);
                true
            }
            Err(e) => {
                tracing::warn!(
                    error = %e,
                    model = %self.config.model,
                    "Failed to rebuild Gemini client for new model"
                );
                false
            }
        }
    }

    /// The fixed set of selectable models (defensive copy).
    pub fn available_models() -> Vec<ModelDescriptor> {
        models::available_models()
    }

    /// Currently selected model id.
    pub fn model(&self) -> &str {
        &self.config.model
    }

    /// Probe the API with a minimal request.
    ///
    /// Lazily initializes if needed. Returns a success flag and a
    /// human-readable status message; provider errors are reported, never
    /// thrown, and the manager stays usable afterwards.
    pub async fn test_connection(&mut self) -> (bool, String) {
        let Some(client) = self.ensure_client() else {
            return (false, NOT_INITIALIZED.to_string());
        };

        let probe_config = GenerationConfig::new(PROBE_TEMPERATURE, PROBE_MAX_TOKENS);
        match client.generate_text(PROBE_PROMPT, probe_config).await {
            Ok(_) => (true, "Gemini connection successful".to_string()),
            Err(GeminiError::EmptyResponse) => {
                (false, "Invalid response from Gemini API".to_string())
            }
            Err(e) => (false, format!("Gemini error: {e}")),
        }
    }

    /// Process a single cell.
    ///
    /// Lazily initializes if needed, composes the prompt from the request,
    /// and issues exactly one generation call. A failed attempt is terminal
    /// for this cell; retry policy belongs to the host.
    pub async fn process_single_cell(&mut self, request: &CellRequest) -> CellOutcome {
        let Some(client) = self.ensure_client() else {
            return CellOutcome::err(NOT_INITIALIZED);
        };

        let prompt = request.compose_prompt();
        let generation_config = GenerationConfig::new(request.temperature, request.max_tokens);

        match client.generate_text(&prompt, generation_config).await {
            Ok(text) => CellOutcome::ok(text),
            Err(e @ GeminiError::EmptyResponse) => CellOutcome::err(e.to_string()),
            Err(e) => {
                tracing::error!(error = %e, "Gemini API request failed");
                CellOutcome::err(format!("Gemini error: {e}"))
            }
        }
    }

    /// Lazy initialization path shared by the request-issuing operations.
    fn ensure_client(&mut self) -> Option<&GeminiClient> {
        if self.client.is_none() {
            self.initialize(None);
        }
        self.client.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    #[tracing_test::traced_test]
    fn test_initialize_without_credential_fails_and_logs() {
        let mut manager = GeminiManager::new(GeminiConfig::default());
        assert!(!manager.initialize(None));
        assert!(logs_contain("API key is required"));
    }

    #[test]
    fn test_initialize_with_explicit_credential() {
        let mut manager = GeminiManager::new(GeminiConfig::default());
        assert!(manager.initialize(Some("test-key")));
        assert!(manager.client.is_some());
    }

    #[test]
    fn test_initialize_ignores_empty_credential_argument() {
        let mut manager = GeminiManager::from_api_key("stored-key");
        assert!(manager.initialize(Some("")));
    }

    #[test]
    fn test_new_with_credential_builds_handle_eagerly() {
        let manager = GeminiManager::from_api_key("test-key");
        assert!(manager.client.is_some());
    }

    #[test]
    fn test_set_model_without_credential_defers_rebuild() {
        let mut manager = GeminiManager::new(GeminiConfig::default());
        assert!(manager.set_model("models/gemini-2.5-pro"));
        assert_eq!(manager.model(), "models/gemini-2.5-pro");
        assert!(manager.client.is_none());
    }

    #[test]
    #[tracing_test::traced_test]
    fn test_set_model_warns_on_unknown_model_but_keeps_it() {
        let mut manager = GeminiManager::new(GeminiConfig::default());
        assert!(manager.set_model("models/gemini-99-ultra"));
        assert_eq!(manager.model(), "models/gemini-99-ultra");
        assert!(logs_contain("not in the static catalog"));
    }

    #[test]
    #[tracing_test::traced_test]
    fn test_set_model_does_not_warn_on_catalog_model() {
        let mut manager = GeminiManager::new(GeminiConfig::default());
        assert!(manager.set_model("models/gemini-2.5-pro"));
        assert!(!logs_contain("not in the static catalog"));
    }

    #[test]
    fn test_set_model_with_credential_rebuilds_handle() {
        let mut manager = GeminiManager::from_api_key("test-key");
        assert!(manager.set_model("models/gemini-2.5-flash"));
        assert_eq!(manager.client.as_ref().unwrap().model(), "models/gemini-2.5-flash");
    }

    #[tokio::test]
    async fn test_lazy_initialize_failure_never_panics() {
        let mut manager = GeminiManager::new(GeminiConfig::default());

        let outcome = manager
            .process_single_cell(&CellRequest::new("B2", "s", "u"))
            .await;
        assert!(!outcome.success);
        assert_eq!(outcome.error.as_deref(), Some(NOT_INITIALIZED));

        let (ok, message) = manager.test_connection().await;
        assert!(!ok);
        assert_eq!(message, NOT_INITIALIZED);
    }

    #[test]
    fn test_available_models_matches_catalog() {
        assert_eq!(
            GeminiManager::available_models(),
            crate::models::available_models()
        );
    }
}
