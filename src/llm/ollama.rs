// ABOUTME: Ollama API client wrapping the OpenAI-compatible API for local
// ABOUTME: LLM inference. Connects to localhost:11434 with a dummy API key.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::{ContentBlock, Message, Request, Response, Role, StopReason, Usage};
use crate::error::LlmError;

/// Base URL for Ollama's OpenAI-compatible API.
pub const OLLAMA_BASE_URL: &str = "http://localhost:11434/v1";

/// Default model when none is specified.
pub const OLLAMA_DEFAULT_MODEL: &str = "qwen2.5:7b-instruct";

/// Chat-completions request wire format.
#[derive(Debug, Serialize)]
struct OllamaRequest {
    model: String,
    messages: Vec<OllamaMessage>,
    #[serde(skip_serializing_if = "Option::is_none")]
    max_tokens: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    temperature: Option<f64>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    tools: Vec<OllamaTool>,
}

/// Chat message wire format.
#[derive(Debug, Serialize, Deserialize)]
struct OllamaMessage {
    role: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    content: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    tool_calls: Option<Vec<OllamaToolCall>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    tool_call_id: Option<String>,
}

/// Tool call in a response.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct OllamaToolCall {
    id: String,
    #[serde(rename = "type")]
    call_type: String,
    function: OllamaFunctionCall,
}

/// Function call details.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct OllamaFunctionCall {
    name: String,
    arguments: String,
}

/// Tool definition wire format.
#[derive(Debug, Serialize)]
struct OllamaTool {
    #[serde(rename = "type")]
    tool_type: String,
    function: OllamaFunction,
}

/// Function definition wire format.
#[derive(Debug, Serialize)]
struct OllamaFunction {
    name: String,
    description: String,
    parameters: serde_json::Value,
}

/// Chat-completions response wire format.
#[derive(Debug, Deserialize)]
struct OllamaResponse {
    id: String,
    model: String,
    choices: Vec<OllamaChoice>,
    usage: Option<OllamaUsage>,
}

#[derive(Debug, Deserialize)]
struct OllamaChoice {
    message: OllamaResponseMessage,
    finish_reason: Option<String>,
}

#[derive(Debug, Deserialize)]
struct OllamaResponseMessage {
    content: Option<String>,
    tool_calls: Option<Vec<OllamaToolCall>>,
}

#[derive(Debug, Deserialize)]
struct OllamaUsage {
    prompt_tokens: u32,
    completion_tokens: u32,
}

/// API error response.
#[derive(Debug, Deserialize)]
struct OllamaError {
    error: OllamaErrorDetail,
}

#[derive(Debug, Deserialize)]
struct OllamaErrorDetail {
    message: String,
}

fn convert_messages(messages: &[Message]) -> Vec<OllamaMessage> {
    let mut result = Vec::new();

    for msg in messages {
        let tool_results: Vec<_> = msg
            .content
            .iter()
            .filter_map(|b| match b {
                ContentBlock::ToolResult {
                    tool_use_id,
                    content,
                    ..
                } => Some((tool_use_id.clone(), content.clone())),
                _ => None,
            })
            .collect();

        if !tool_results.is_empty() {
            // The wire format wants one "tool" role message per result.
            for (tool_use_id, content) in tool_results {
                result.push(OllamaMessage {
                    role: "tool".to_string(),
                    content: Some(content),
                    tool_calls: None,
                    tool_call_id: Some(tool_use_id),
                });
            }
            continue;
        }

        let role = match msg.role {
            Role::User => "user",
            Role::Assistant => "assistant",
        };

        let tool_calls: Vec<OllamaToolCall> = msg
            .content
            .iter()
            .filter_map(|b| match b {
                ContentBlock::ToolUse { id, name, input } => Some(OllamaToolCall {
                    id: id.clone(),
                    call_type: "function".to_string(),
                    function: OllamaFunctionCall {
                        name: name.clone(),
                        arguments: serde_json::to_string(input).unwrap_or_default(),
                    },
                }),
                _ => None,
            })
            .collect();

        let text: String = msg
            .content
            .iter()
            .filter_map(|b| match b {
                ContentBlock::Text { text } => Some(text.as_str()),
                _ => None,
            })
            .collect::<Vec<_>>()
            .join("");

        result.push(OllamaMessage {
            role: role.to_string(),
            content: if text.is_empty() { None } else { Some(text) },
            tool_calls: if tool_calls.is_empty() {
                None
            } else {
                Some(tool_calls)
            },
            tool_call_id: None,
        });
    }

    result
}

impl From<&Request> for OllamaRequest {
    fn from(req: &Request) -> Self {
        let mut messages = Vec::new();

        if let Some(ref system) = req.system {
            messages.push(OllamaMessage {
                role: "system".to_string(),
                content: Some(system.clone()),
                tool_calls: None,
                tool_call_id: None,
            });
        }

        messages.extend(convert_messages(&req.messages));

        OllamaRequest {
            model: req.model.clone(),
            messages,
            max_tokens: req.max_tokens,
            temperature: req.temperature,
            tools: req
                .tools
                .iter()
                .map(|t| OllamaTool {
                    tool_type: "function".to_string(),
                    function: OllamaFunction {
                        name: t.name.clone(),
                        description: t.description.clone(),
                        parameters: t.input_schema.clone(),
                    },
                })
                .collect(),
        }
    }
}

fn parse_stop_reason(s: Option<&str>) -> StopReason {
    match s {
        Some("tool_calls") => StopReason::ToolUse,
        Some("length") => StopReason::MaxTokens,
        _ => StopReason::EndTurn,
    }
}

impl TryFrom<OllamaResponse> for Response {
    type Error = LlmError;

    fn try_from(resp: OllamaResponse) -> Result<Self, LlmError> {
        let choice = resp
            .choices
            .into_iter()
            .next()
            .ok_or_else(|| LlmError::Configuration("response contained no choices".to_string()))?;

        let mut content = Vec::new();
        if let Some(text) = choice.message.content {
            if !text.is_empty() {
                content.push(ContentBlock::text(text));
            }
        }
        for call in choice.message.tool_calls.unwrap_or_default() {
            let input = serde_json::from_str(&call.function.arguments)?;
            content.push(ContentBlock::ToolUse {
                id: call.id,
                name: call.function.name,
                input,
            });
        }

        Ok(Response {
            id: resp.id,
            content,
            stop_reason: parse_stop_reason(choice.finish_reason.as_deref()),
            model: resp.model,
            usage: resp
                .usage
                .map(|u| Usage {
                    input_tokens: u.prompt_tokens,
                    output_tokens: u.completion_tokens,
                })
                .unwrap_or_default(),
        })
    }
}

/// Client for the Ollama API.
/// Ollama runs LLMs locally and exposes an OpenAI-compatible API.
#[derive(Debug, Clone)]
pub struct OllamaClient {
    base_url: String,
    http: reqwest::Client,
    default_model: String,
}

impl OllamaClient {
    /// Create a new Ollama client connecting to localhost:11434.
    pub fn new(model: &str) -> Self {
        Self::with_base_url(OLLAMA_BASE_URL, model)
    }

    /// Create a new Ollama client with a custom base URL.
    pub fn with_base_url(base_url: &str, model: &str) -> Self {
        Self {
            base_url: base_url.to_string(),
            http: reqwest::Client::new(),
            default_model: if model.is_empty() {
                OLLAMA_DEFAULT_MODEL.to_string()
            } else {
                model.to_string()
            },
        }
    }
}

impl Default for OllamaClient {
    fn default() -> Self {
        Self::new(OLLAMA_DEFAULT_MODEL)
    }
}

#[async_trait]
impl super::client::LlmClient for OllamaClient {
    async fn create_message(&self, req: &Request) -> Result<Response, LlmError> {
        let mut ollama_req = OllamaRequest::from(req);

        // Use default model if none specified
        if ollama_req.model.is_empty() {
            ollama_req.model = self.default_model.clone();
        }

        let url = format!("{}/chat/completions", self.base_url);
        debug!(
            model = %ollama_req.model,
            messages = ollama_req.messages.len(),
            tools = ollama_req.tools.len(),
            %url,
            "sending chat completion request"
        );

        // Ollama ignores the API key but the HTTP layer may require one
        let response = self
            .http
            .post(&url)
            .header("Authorization", "Bearer ollama")
            .header("Content-Type", "application/json")
            .json(&ollama_req)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let error: OllamaError = response.json().await?;
            debug!(status = status.as_u16(), message = %error.error.message, "chat completion failed");
            return Err(LlmError::Api {
                status: status.as_u16(),
                message: error.error.message,
            });
        }

        let ollama_resp: OllamaResponse = response.json().await?;
        debug!(id = %ollama_resp.id, "received chat completion response");
        Response::try_from(ollama_resp)
    }
}
