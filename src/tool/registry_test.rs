// ABOUTME: Tests for tool Registry - registration, lookup, thread safety.
// ABOUTME: Uses a mock tool for testing.

use super::*;

/// A simple test tool.
struct EchoTool;

#[async_trait::async_trait]
impl Tool for EchoTool {
    fn name(&self) -> &str {
        "echo"
    }

    fn description(&self) -> &str {
        "Echoes input back"
    }

    fn schema(&self) -> serde_json::Value {
        serde_json::json!({
            "type": "object",
            "properties": {
                "message": { "type": "string" }
            },
            "required": ["message"]
        })
    }

    async fn execute(&self, params: serde_json::Value) -> Result<ToolResult, anyhow::Error> {
        #[derive(serde::Deserialize)]
        struct Params {
            message: String,
        }
        let params: Params = serde_json::from_value(params)?;
        Ok(ToolResult::report(params.message))
    }
}

#[tokio::test]
async fn test_register_and_get() {
    let registry = Registry::new();
    registry.register(EchoTool).await;

    let tool = registry.get("echo").await;
    assert!(tool.is_some());
    assert_eq!(tool.unwrap().name(), "echo");
}

#[tokio::test]
async fn test_get_nonexistent() {
    let registry = Registry::new();
    let tool = registry.get("nonexistent").await;
    assert!(tool.is_none());
}

#[tokio::test]
async fn test_list_sorted() {
    let registry = Registry::new();
    registry.register(EchoTool).await;

    let names = registry.list().await;
    assert_eq!(names, vec!["echo"]);
    assert_eq!(registry.count().await, 1);
}

#[tokio::test]
async fn test_execute_dispatches_by_name() {
    let registry = Registry::new();
    registry.register(EchoTool).await;

    let result = registry
        .execute("echo", serde_json::json!({"message": "hi"}))
        .await
        .unwrap();
    assert_eq!(result, ToolResult::report("hi"));
}

#[tokio::test]
async fn test_execute_malformed_params() {
    let registry = Registry::new();
    registry.register(EchoTool).await;

    let err = registry.execute("echo", serde_json::json!({})).await;
    assert!(matches!(
        err,
        Err(crate::error::ToolError::InvalidParams(_))
    ));
}

#[tokio::test]
async fn test_execute_unknown_tool() {
    let registry = Registry::new();
    let err = registry.execute("missing", serde_json::json!({})).await;
    assert!(matches!(
        err,
        Err(crate::error::ToolError::NotFound(name)) if name == "missing"
    ));
}

#[tokio::test]
async fn test_to_definitions() {
    let registry = Registry::new();
    registry.register(EchoTool).await;

    let defs = registry.to_definitions().await;
    assert_eq!(defs.len(), 1);
    assert_eq!(defs[0].name, "echo");
    assert_eq!(defs[0].description, "Echoes input back");
}

#[tokio::test]
async fn test_clone_shares_state() {
    let registry = Registry::new();
    let clone = registry.clone();

    registry.register(EchoTool).await;
    assert_eq!(clone.count().await, 1);
}
