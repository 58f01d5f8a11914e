// ABOUTME: WeatherTool - reports current conditions for a fixed set of cities.
// ABOUTME: Returns an error result naming any city outside the table.

use async_trait::async_trait;
use serde::Deserialize;

use crate::tool::{Tool, ToolResult};

/// Fixture conditions per city. Matching is case-sensitive.
const WEATHER_TABLE: &[(&str, &str)] = &[
    ("London", "overcast with a temperature of 16°C"),
    ("New York", "sunny with a temperature of 25°C"),
    ("Tokyo", "light rain with a temperature of 22°C"),
];

fn conditions_for(city: &str) -> Option<&'static str> {
    WEATHER_TABLE
        .iter()
        .find(|(name, _)| *name == city)
        .map(|(_, conditions)| *conditions)
}

/// Tool for looking up the weather report for a city.
pub struct WeatherTool;

#[async_trait]
impl Tool for WeatherTool {
    fn name(&self) -> &str {
        "get_weather"
    }

    fn description(&self) -> &str {
        "Retrieves the current weather report for a specified city."
    }

    fn schema(&self) -> serde_json::Value {
        serde_json::json!({
            "type": "object",
            "properties": {
                "city": {
                    "type": "string",
                    "description": "The name of the city to get the weather for"
                }
            },
            "required": ["city"]
        })
    }

    async fn execute(&self, params: serde_json::Value) -> Result<ToolResult, anyhow::Error> {
        #[derive(Deserialize)]
        struct Params {
            city: String,
        }
        let params: Params = serde_json::from_value(params)?;

        Ok(match conditions_for(&params.city) {
            Some(conditions) => ToolResult::report(format!(
                "The weather in {} is {}.",
                params.city, conditions
            )),
            None => ToolResult::error(format!(
                "Weather information for '{}' is not available.",
                params.city
            )),
        })
    }
}
