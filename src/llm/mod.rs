// ABOUTME: LLM module - model adapter, client seam, and the Ollama bridge.
// ABOUTME: Defines types, traits, and the local-inference implementation.

mod adapter;
mod client;
mod ollama;
mod types;

pub use adapter::*;
pub use client::*;
pub use ollama::*;
pub use types::*;
