// ABOUTME: Built-in tools for the weather-and-time agent.
// ABOUTME: Both are fixed-table lookups over a city name.

mod current_time;
mod weather;

pub use current_time::CurrentTimeTool;
pub use weather::WeatherTool;
