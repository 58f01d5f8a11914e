// ABOUTME: Integration tests verifying modules work together.
// ABOUTME: Tests the full assembly workflow without external dependencies.

use weathertime::prelude::*;

#[tokio::test]
async fn test_assembled_agent_answers_weather_lookup() {
    let config = Config::default();
    weathertime::logging::init(config.verbose);
    let agent = weather_time_agent(&config).await;

    let tool = agent
        .tools
        .get("get_weather")
        .await
        .expect("Tool should exist");
    let result = tool
        .execute(serde_json::json!({"city": "New York"}))
        .await
        .expect("Execution should succeed");

    assert!(!result.is_error());
    assert_eq!(
        result.message(),
        "The weather in New York is sunny with a temperature of 25°C."
    );
}

#[tokio::test]
async fn test_unknown_city_flows_back_as_error_data() {
    let agent = weather_time_agent(&Config::default()).await;

    let tool = agent
        .tools
        .get("get_weather")
        .await
        .expect("Tool should exist");
    let result = tool
        .execute(serde_json::json!({"city": "Paris"}))
        .await
        .expect("Execution should succeed");

    assert!(result.is_error());
    assert_eq!(
        serde_json::to_value(&result).unwrap(),
        serde_json::json!({
            "status": "error",
            "error_message": "Weather information for 'Paris' is not available."
        })
    );
}

#[tokio::test]
async fn test_tool_definitions_for_llm() {
    let agent = weather_time_agent(&Config::default()).await;

    let definitions = agent.tool_definitions().await;
    assert_eq!(definitions.len(), 2);

    let names: Vec<_> = definitions.iter().map(|d| d.name.as_str()).collect();
    assert!(names.contains(&"get_weather"));
    assert!(names.contains(&"get_current_time"));
}

#[tokio::test]
async fn test_request_building_from_agent() {
    let agent = weather_time_agent(&Config::default()).await;

    let request = Request::new(agent.adapter.model())
        .system(agent.instruction.clone())
        .message(Message::user("What's the weather in Tokyo?"))
        .tools(agent.tool_definitions().await);

    assert_eq!(request.model, DEFAULT_MODEL);
    assert_eq!(request.messages.len(), 1);
    assert_eq!(request.tools.len(), 2);
    assert!(
        request
            .system
            .as_deref()
            .unwrap()
            .contains("time and weather")
    );
}

#[tokio::test]
async fn test_bridge_client_from_config() {
    let config = Config::default();
    let agent = weather_time_agent(&config).await;

    // The runner wires the bridge from the same config the agent was built
    // with; no request is made here.
    let _client = OllamaClient::with_base_url(&config.base_url, agent.adapter.model());
}

#[tokio::test]
async fn test_tool_result_feeds_conversation() {
    let agent = weather_time_agent(&Config::default()).await;

    let tool = agent
        .tools
        .get("get_current_time")
        .await
        .expect("Tool should exist");
    let result = tool
        .execute(serde_json::json!({"city": "London"}))
        .await
        .expect("Execution should succeed");

    // The runner would hand the serialized result back as a tool-result block.
    let payload = serde_json::to_string(&result).unwrap();
    let message = Message::tool_results(vec![ContentBlock::tool_result("call_1", payload)]);
    assert_eq!(message.role, Role::User);
}
