// ABOUTME: Process configuration - model selection and logging verbosity.
// ABOUTME: Read once from the environment at startup and passed explicitly.

use crate::llm::OLLAMA_BASE_URL;

/// Environment variable naming the Ollama model to serve requests with.
pub const OLLAMA_MODEL_ENV: &str = "OLLAMA_MODEL";

/// Model used when the environment does not name one.
pub const DEFAULT_MODEL: &str = "qwen2.5:7b-instruct";

/// Startup configuration for agent assembly.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Bare model identifier, without a routing scheme.
    pub model: String,

    /// Base URL of the local Ollama server.
    pub base_url: String,

    /// Enable debug-level request logging.
    pub verbose: bool,
}

impl Config {
    /// Read configuration from the environment.
    ///
    /// The model comes from [`OLLAMA_MODEL_ENV`]; the server named there is
    /// expected to already be running and serving the model.
    pub fn from_env() -> Self {
        Self::resolve(std::env::var(OLLAMA_MODEL_ENV).ok())
    }

    /// Resolve a raw model value. Unset and set-but-empty both fall back
    /// to [`DEFAULT_MODEL`].
    fn resolve(raw: Option<String>) -> Self {
        let model = match raw {
            Some(model) if !model.is_empty() => model,
            _ => DEFAULT_MODEL.to_string(),
        };
        Self {
            model,
            ..Self::default()
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            model: DEFAULT_MODEL.to_string(),
            base_url: OLLAMA_BASE_URL.to_string(),
            verbose: true,
        }
    }
}
