//! Prompt composition for per-cell requests.
//!
//! A [`CellRequest`] carries everything one generation call needs: the cell
//! text, the two prompt layers, sampling parameters, and optional ordered
//! context pairs taken from neighboring columns. The composed prompt format
//! is a stable contract with the host application.

/// Default sampling temperature for cell processing.
pub const DEFAULT_TEMPERATURE: f64 = 0.3;
/// Default output-length cap for cell processing.
pub const DEFAULT_MAX_TOKENS: i32 = 150;

/// One cell-processing request.
///
/// Built per call and never persisted. Context pairs keep their insertion
/// order, which is also the order they appear in the composed prompt.
#[derive(Debug, Clone)]
pub struct CellRequest {
    /// Content of the cell being processed
    pub cell_content: String,
    /// System prompt for the model
    pub system_prompt: String,
    /// User prompt for the model
    pub user_prompt: String,
    /// Sampling temperature
    pub temperature: f64,
    /// Maximum number of output tokens
    pub max_tokens: i32,
    /// Ordered context pairs from other columns
    pub context: Vec<(String, String)>,
}

impl CellRequest {
    /// Create a request with the default temperature and token cap.
    pub fn new(
        cell_content: impl Into<String>,
        system_prompt: impl Into<String>,
        user_prompt: impl Into<String>,
    ) -> Self {
        Self {
            cell_content: cell_content.into(),
            system_prompt: system_prompt.into(),
            user_prompt: user_prompt.into(),
            temperature: DEFAULT_TEMPERATURE,
            max_tokens: DEFAULT_MAX_TOKENS,
            context: Vec::new(),
        }
    }

    /// Set the sampling temperature.
    pub fn with_temperature(mut self, temperature: f64) -> Self {
        self.temperature = temperature;
        self
    }

    /// Set the maximum number of output tokens.
    pub fn with_max_tokens(mut self, max_tokens: i32) -> Self {
        self.max_tokens = max_tokens;
        self
    }

    /// Append one context pair.
    pub fn with_context_pair(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.context.push((key.into(), value.into()));
        self
    }

    /// Replace all context pairs.
    pub fn with_context(mut self, context: Vec<(String, String)>) -> Self {
        self.context = context;
        self
    }

    /// Compose the full prompt sent to the model.
    ///
    /// Layout: system prompt, user prompt, and the labeled cell content,
    /// separated by blank lines. When context pairs are present a trailing
    /// "Context information:" block lists them one per line, in insertion
    /// order, each line newline-terminated.
    pub fn compose_prompt(&self) -> String {
        let mut prompt = format!(
            "{}\n\n{}\n\nCell content: {}",
            self.system_prompt, self.user_prompt, self.cell_content
        );

        if !self.context.is_empty() {
            prompt.push_str("\n\nContext information:\n");
            for (key, value) in &self.context {
                prompt.push_str(&format!("- {key}: {value}\n"));
            }
        }

        prompt
    }
}
