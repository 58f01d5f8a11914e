// ABOUTME: Defines the LlmClient trait - the abstraction layer that lets
// ABOUTME: the agent work with any model backend.

use async_trait::async_trait;

use super::{Request, Response};
use crate::error::LlmError;

/// Trait for LLM client implementations.
///
/// The external runner drives this; the crate only supplies the seam and
/// the Ollama-backed implementation.
#[async_trait]
pub trait LlmClient: Send + Sync {
    /// Create a message (non-streaming).
    async fn create_message(&self, req: &Request) -> Result<Response, LlmError>;
}
