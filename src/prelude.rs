// ABOUTME: Prelude module - convenient imports for common use cases.
// ABOUTME: Use `use weathertime::prelude::*;` to get started quickly.

pub use crate::agent::{Agent, weather_time_agent};
pub use crate::config::{Config, DEFAULT_MODEL, OLLAMA_MODEL_ENV};
pub use crate::error::{AgentError, LlmError, ToolError};
pub use crate::llm::{
    ContentBlock, LlmClient, Message, ModelAdapter, OllamaClient, Request, Response, Role,
    StopReason, ToolDefinition, Usage,
};
pub use crate::tool::{Registry, Tool, ToolResult};
pub use crate::tools::{CurrentTimeTool, WeatherTool};
