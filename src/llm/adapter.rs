// ABOUTME: ModelAdapter - a routing-scheme-qualified model identifier.
// ABOUTME: Renders as "ollama_chat/<model>" for the local-inference bridge.

use std::fmt;

/// Routing scheme for chat requests served by a local Ollama instance.
pub const OLLAMA_CHAT_SCHEME: &str = "ollama_chat";

/// A model identifier qualified with the routing scheme the inference
/// bridge uses to pick a backend.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModelAdapter {
    scheme: &'static str,
    model: String,
}

impl ModelAdapter {
    /// Create an adapter routing through the Ollama chat backend.
    pub fn ollama_chat(model: impl Into<String>) -> Self {
        Self {
            scheme: OLLAMA_CHAT_SCHEME,
            model: model.into(),
        }
    }

    /// The routing scheme portion.
    pub fn scheme(&self) -> &str {
        self.scheme
    }

    /// The bare model identifier, without the scheme.
    pub fn model(&self) -> &str {
        &self.model
    }
}

impl fmt::Display for ModelAdapter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.scheme, self.model)
    }
}
