// ABOUTME: CurrentTimeTool - reports the current local time for a fixed set
// ABOUTME: of cities. The instant is injectable so tests stay deterministic.

use async_trait::async_trait;
use chrono::{DateTime, FixedOffset, Utc};
use serde::Deserialize;

use crate::tool::{Tool, ToolResult};

/// Fixed city -> UTC offset table, in seconds east of UTC (standard time).
const TIMEZONE_TABLE: &[(&str, i32)] = &[
    ("London", 0),
    ("New York", -5 * 3600),
    ("Tokyo", 9 * 3600),
];

fn offset_for(city: &str) -> Option<FixedOffset> {
    TIMEZONE_TABLE
        .iter()
        .find(|(name, _)| *name == city)
        .and_then(|(_, secs)| FixedOffset::east_opt(*secs))
}

/// Tool for looking up the current local time in a city.
pub struct CurrentTimeTool;

impl CurrentTimeTool {
    /// Render the result for a specific instant.
    ///
    /// `execute` calls this with the host clock; tests pass a fixed instant.
    pub fn report_at(&self, city: &str, now: DateTime<Utc>) -> ToolResult {
        match offset_for(city) {
            Some(offset) => {
                let local = now.with_timezone(&offset);
                ToolResult::report(format!(
                    "The current time in {} is {}.",
                    city,
                    local.format("%Y-%m-%d %H:%M:%S GMT%:z")
                ))
            }
            None => ToolResult::error(format!(
                "Sorry, I don't have timezone information for '{}'.",
                city
            )),
        }
    }
}

#[async_trait]
impl Tool for CurrentTimeTool {
    fn name(&self) -> &str {
        "get_current_time"
    }

    fn description(&self) -> &str {
        "Returns the current local time in a specified city."
    }

    fn schema(&self) -> serde_json::Value {
        serde_json::json!({
            "type": "object",
            "properties": {
                "city": {
                    "type": "string",
                    "description": "The name of the city to get the current time for"
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

        Ok(self.report_at(&params.city, Utc::now()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn fixed_instant() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 1, 15, 12, 0, 0).unwrap()
    }

    #[test]
    fn test_new_york_at_fixed_instant() {
        let tool = CurrentTimeTool;
        let result = tool.report_at("New York", fixed_instant());
        assert_eq!(
            result,
            ToolResult::report("The current time in New York is 2025-01-15 07:00:00 GMT-05:00.")
        );
    }

    #[test]
    fn test_known_cities_report_year_and_offset() {
        let tool = CurrentTimeTool;
        for (city, _) in TIMEZONE_TABLE {
            let result = tool.report_at(city, fixed_instant());
            assert!(!result.is_error());
            assert!(result.message().contains("2025"));
            assert!(result.message().contains("GMT"));
            assert!(result.message().contains(city));
        }
    }

    #[test]
    fn test_unknown_city_errors() {
        let tool = CurrentTimeTool;
        let result = tool.report_at("Atlantis", fixed_instant());
        assert!(result.is_error());
        assert!(result.message().contains("Atlantis"));
    }

    #[tokio::test]
    async fn test_execute_uses_host_clock() {
        let tool = CurrentTimeTool;
        let result = tool
            .execute(serde_json::json!({ "city": "London" }))
            .await
            .unwrap();
        assert!(!result.is_error());
        assert!(result.message().contains("GMT"));
    }

    #[tokio::test]
    async fn test_missing_city_param_is_err() {
        let tool = CurrentTimeTool;
        let result = tool.execute(serde_json::json!({})).await;
        assert!(result.is_err());
    }
}
