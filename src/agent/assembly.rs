// ABOUTME: One-time assembly of the weather-and-time agent.
// ABOUTME: Registers both lookup tools and wires the configured model adapter.

use tracing::info;

use super::Agent;
use crate::config::Config;
use crate::llm::ModelAdapter;
use crate::tool::Registry;
use crate::tools::{CurrentTimeTool, WeatherTool};

/// System instruction given to the model.
const INSTRUCTION: &str =
    "You are a helpful agent who can answer user questions about the time and weather in a city.";

/// Build the weather-and-time agent from the given configuration.
///
/// Runs once at process start; the returned agent is the durable artifact
/// an external runner drives. Installs the logging subscriber according to
/// `config.verbose` (the first installation wins). Assembly itself has no
/// error path - a bad model identifier surfaces later, on the first request.
pub async fn weather_time_agent(config: &Config) -> Agent {
    crate::logging::init(config.verbose);

    let tools = Registry::new();
    tools.register(WeatherTool).await;
    tools.register(CurrentTimeTool).await;

    let adapter = ModelAdapter::ollama_chat(&config.model);
    info!(adapter = %adapter, tools = tools.count().await, "assembling weather_time_agent");

    Agent::new("weather_time_agent", adapter)
        .description("Agent to answer questions about the time and weather in a city.")
        .instruction(INSTRUCTION)
        .tools(tools)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DEFAULT_MODEL;

    #[tokio::test]
    async fn test_assembly_with_default_config() {
        let agent = weather_time_agent(&Config::default()).await;

        assert_eq!(agent.name, "weather_time_agent");
        assert_eq!(
            agent.adapter.to_string(),
            format!("ollama_chat/{}", DEFAULT_MODEL)
        );
        assert_eq!(
            agent.tools.list().await,
            vec!["get_current_time", "get_weather"]
        );
    }

    #[tokio::test]
    async fn test_assembly_enables_verbose_logging() {
        let config = Config::default();
        assert!(config.verbose);

        weather_time_agent(&config).await;
        assert!(tracing::enabled!(tracing::Level::DEBUG));
    }

    #[tokio::test]
    async fn test_assembly_uses_configured_model() {
        let config = Config {
            model: "foo".to_string(),
            ..Config::default()
        };
        let agent = weather_time_agent(&config).await;
        assert_eq!(agent.adapter.to_string(), "ollama_chat/foo");
    }

    #[tokio::test]
    async fn test_assembled_tool_definitions() {
        let agent = weather_time_agent(&Config::default()).await;
        let defs = agent.tool_definitions().await;

        assert_eq!(defs.len(), 2);
        for def in defs {
            assert!(!def.description.is_empty());
            assert!(def.input_schema["properties"]["city"].is_object());
        }
    }
}
