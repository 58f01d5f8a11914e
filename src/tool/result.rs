// ABOUTME: Defines the ToolResult type - the tagged outcome of a tool call,
// ABOUTME: a status plus either a report or an error message.

use serde::{Deserialize, Serialize};

/// Result of a tool execution.
///
/// Serializes to `{"status": "success", "report": ...}` or
/// `{"status": "error", "error_message": ...}` - the shape the model sees
/// when a tool call completes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum ToolResult {
    Success { report: String },
    Error { error_message: String },
}

impl ToolResult {
    /// Create a successful result carrying a report.
    pub fn report(report: impl Into<String>) -> Self {
        Self::Success {
            report: report.into(),
        }
    }

    /// Create an error result.
    pub fn error(message: impl Into<String>) -> Self {
        Self::Error {
            error_message: message.into(),
        }
    }

    /// Whether this result represents an error.
    pub fn is_error(&self) -> bool {
        matches!(self, Self::Error { .. })
    }

    /// The report or error message, whichever is present.
    pub fn message(&self) -> &str {
        match self {
            Self::Success { report } => report,
            Self::Error { error_message } => error_message,
        }
    }
}
