//! Static Gemini model catalog.
//!
//! The selectable models are fixed at build time; nothing here talks to the
//! network. The manager passes arbitrary model ids through to the API, so the
//! catalog is advisory: it drives UI pickers, not validation.

/// One selectable Gemini model.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModelDescriptor {
    /// Model resource id as the API expects it (e.g. "models/gemini-2.0-flash")
    pub id: &'static str,
    /// Human-readable name
    pub display_name: &'static str,
    /// Provider tag
    pub provider: &'static str,
}

/// The fixed set of models offered to callers.
const AVAILABLE_MODELS: &[ModelDescriptor] = &[
    ModelDescriptor {
        id: "models/gemini-2.0-flash",
        display_name: "Gemini 2.0 Flash",
        provider: "gemini",
    },
    ModelDescriptor {
        id: "models/gemini-2.0-flash-lite",
        display_name: "Gemini 2.0 Flash Lite",
        provider: "gemini",
    },
    ModelDescriptor {
        id: "models/gemini-2.5-flash",
        display_name: "Gemini 2.5 Flash",
        provider: "gemini",
    },
    ModelDescriptor {
        id: "models/gemini-2.5-pro",
        display_name: "Gemini 2.5 Pro",
        provider: "gemini",
    },
];

/// Owned copy of the model catalog.
///
/// Callers may mutate the returned vector freely without affecting later
/// calls.
pub fn available_models() -> Vec<ModelDescriptor> {
    AVAILABLE_MODELS.to_vec()
}

/// Default model id used when the caller never picked one.
pub fn default_model() -> &'static str {
    AVAILABLE_MODELS[0].id
}

/// Look up a catalog entry by id.
///
/// Accepts either the full resource id ("models/gemini-2.0-flash") or the
/// bare model name ("gemini-2.0-flash").
pub fn find_model(model_id: &str) -> Option<&'static ModelDescriptor> {
    AVAILABLE_MODELS
        .iter()
        .find(|m| m.id == model_id || m.id.strip_prefix("models/") == Some(model_id))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_contents() {
        let models = available_models();
        assert_eq!(models.len(), 4);
        assert!(models.iter().all(|m| m.provider == "gemini"));
        assert!(models.iter().any(|m| m.id == "models/gemini-2.5-pro"));
    }

    #[test]
    fn test_catalog_is_defensive_copy() {
        let mut models = available_models();
        models.clear();
        assert_eq!(available_models().len(), 4);
    }

    #[test]
    fn test_find_model_accepts_bare_name() {
        assert!(find_model("models/gemini-2.0-flash").is_some());
        assert!(find_model("gemini-2.0-flash").is_some());
        assert!(find_model("gpt-4o").is_none());
    }

    #[test]
    fn test_default_model_is_in_catalog() {
        assert!(find_model(default_model()).is_some());
    }
}
