//! Uniform per-cell result shape.

/// Terminal outcome of one cell-processing call.
///
/// Exactly one of `result` and `error` is populated. The host application
/// uses this to decide per cell whether to keep the text, skip the cell, or
/// abort a batch; no retry happens below this boundary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CellOutcome {
    /// Whether the call produced usable text
    pub success: bool,
    /// Trimmed completion text on success
    pub result: Option<String>,
    /// Human-readable failure message otherwise
    pub error: Option<String>,
}

impl CellOutcome {
    /// Successful outcome carrying the completion text.
    pub fn ok(result: impl Into<String>) -> Self {
        Self {
            success: true,
            result: Some(result.into()),
            error: None,
        }
    }

    /// Failed outcome carrying a message.
    pub fn err(message: impl Into<String>) -> Self {
        Self {
            success: false,
            result: None,
            error: Some(message.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ok_shape() {
        let outcome = CellOutcome::ok("Positive");
        assert!(outcome.success);
        assert_eq!(outcome.result.as_deref(), Some("Positive"));
        assert!(outcome.error.is_none());
    }

    #[test]
    fn test_err_shape() {
        let outcome = CellOutcome::err("Empty response from Gemini API");
        assert!(!outcome.success);
        assert!(outcome.result.is_none());
        assert_eq!(
            outcome.error.as_deref(),
            Some("Empty response from Gemini API")
        );
    }
}
