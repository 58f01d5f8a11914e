// ABOUTME: Agent module - the configured agent record and its assembly.
// ABOUTME: Provides the Agent type and the weather_time_agent constructor.

mod assembly;
mod definition;

pub use assembly::weather_time_agent;
pub use definition::Agent;
