// ABOUTME: Agent definition - the immutable record combining identity,
// ABOUTME: instruction text, model adapter, and the registered tools.

use crate::llm::{ModelAdapter, ToolDefinition};
use crate::tool::Registry;

/// A configured conversational agent.
///
/// Constructed once at startup and never mutated. The external runner
/// drives conversation turns and decides when tools run.
#[derive(Clone)]
pub struct Agent {
    /// Unique name for this agent.
    pub name: String,

    /// Human-readable description of what the agent does.
    pub description: String,

    /// System instruction given to the model.
    pub instruction: String,

    /// Routing-scheme-qualified model the agent talks to.
    pub adapter: ModelAdapter,

    /// Tools the model may invoke.
    pub tools: Registry,
}

impl Agent {
    /// Create a new agent with required fields.
    pub fn new(name: impl Into<String>, adapter: ModelAdapter) -> Self {
        Self {
            name: name.into(),
            description: String::new(),
            instruction: String::new(),
            adapter,
            tools: Registry::new(),
        }
    }

    /// Set the description.
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Set the system instruction.
    pub fn instruction(mut self, instruction: impl Into<String>) -> Self {
        self.instruction = instruction.into();
        self
    }

    /// Set the tool registry.
    pub fn tools(mut self, tools: Registry) -> Self {
        self.tools = tools;
        self
    }

    /// Tool definitions for handing to an LLM request.
    pub async fn tool_definitions(&self) -> Vec<ToolDefinition> {
        self.tools.to_definitions().await
    }
}
