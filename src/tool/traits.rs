// ABOUTME: Defines the Tool trait - the core abstraction for agent capabilities.
// ABOUTME: Tools have a name, description, schema, and async execute method.

use async_trait::async_trait;

use super::ToolResult;

/// A tool that can be executed by an agent.
#[async_trait]
pub trait Tool: Send + Sync {
    /// Returns the unique name of this tool.
    fn name(&self) -> &str;

    /// Returns a human-readable description for the LLM.
    fn description(&self) -> &str;

    /// Returns the JSON Schema for the tool's input parameters.
    fn schema(&self) -> serde_json::Value;

    /// Execute the tool with the given parameters.
    ///
    /// Domain failures (an unrecognized city) are returned as
    /// [`ToolResult::error`] data; `Err` is reserved for malformed
    /// parameters.
    async fn execute(&self, params: serde_json::Value) -> Result<ToolResult, anyhow::Error>;
}
